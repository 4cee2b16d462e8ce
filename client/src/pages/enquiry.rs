//! Product, wholesale and collaboration enquiries.

use leptos::prelude::*;

use crate::components::enquiry_form::EnquiryForm;

#[component]
pub fn EnquiryPage() -> impl IntoView {
    view! {
        <section class="enquiry-page">
            <h1>"Make an Enquiry"</h1>
            <p>
                "Tell us what you are looking for. A confirmation file with your enquiry details is saved to your device when you submit."
            </p>
            <EnquiryForm/>
        </section>
    }
}
