//! Contact form and store map.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::store_map::StoreMap;
use crate::content::{CONTACT_EMAIL, CONTACT_PHONE, STORE_LOCATION};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="contact-page">
            <h1>"Contact Us"</h1>
            <div class="contact-info">
                <p>{STORE_LOCATION}</p>
                <p>{CONTACT_EMAIL}</p>
                <p>{CONTACT_PHONE}</p>
            </div>
            <ContactForm/>
            <h2>"Find Our Store"</h2>
            <StoreMap/>
        </section>
    }
}
