//! Site-wide footer with the business contact details.

use leptos::prelude::*;

use crate::content::{BRAND_NAME, CONTACT_EMAIL, CONTACT_PHONE, STORE_LOCATION, WEBSITE};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <h3>{BRAND_NAME}</h3>
                <p>{STORE_LOCATION}</p>
                <p>
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    " | "
                    {CONTACT_PHONE}
                </p>
                <p>{WEBSITE}</p>
            </div>
        </footer>
    }
}
