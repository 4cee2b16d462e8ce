//! Landing page: hero, featured products and the quick-contact form.

use leptos::prelude::*;

use crate::catalog::PRODUCTS;
use crate::components::home_contact_form::HomeContactForm;
use crate::components::product_card::ProductCard;
use crate::content::BRAND_NAME;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1>{BRAND_NAME}</h1>
                <p>"Streetwear made in Mpumalanga, built for everyday comfort."</p>
                <a class="btn" href="#featured">"Shop the collection"</a>
            </div>
        </section>
        <section id="featured" class="featured-products">
            <h2>"Featured Products"</h2>
            <div class="product-grid">
                {PRODUCTS.iter().map(|product| view! { <ProductCard product=product/> }).collect_view()}
            </div>
        </section>
        <section id="contact" class="home-contact">
            <h2>"Get in Touch"</h2>
            <HomeContactForm/>
        </section>
    }
}
