//! Product listing with the search panel.

use leptos::prelude::*;

use crate::catalog::PRODUCTS;
use crate::components::product_card::ProductCard;
use crate::components::product_search::ProductSearch;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <section class="products-page">
            <h1>"Our Products"</h1>
            <ProductSearch/>
            <h2>"All Products"</h2>
            <div class="product-grid">
                {PRODUCTS.iter().map(|product| view! { <ProductCard product=product/> }).collect_view()}
            </div>
        </section>
    }
}
