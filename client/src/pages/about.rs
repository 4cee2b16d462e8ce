//! Brand story and FAQ.

use leptos::prelude::*;

use crate::components::accordion::{Accordion, AccordionEntry};
use crate::content::{BRAND_NAME, STORE_LOCATION};

const FAQ: &[AccordionEntry] = &[
    AccordionEntry {
        title: "Where are you based?",
        body: "Our store and studio are in Sabie, Mpumalanga. Visit us any weekday.",
    },
    AccordionEntry {
        title: "Do you deliver nationwide?",
        body: "Yes. Orders ship to anywhere in South Africa within 3-5 working days.",
    },
    AccordionEntry {
        title: "Can I order in bulk?",
        body: "We supply teams, schools and events. Send a wholesale enquiry for pricing.",
    },
    AccordionEntry {
        title: "What is your returns policy?",
        body: "Unworn items with tags can be returned within 14 days of delivery.",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About " {BRAND_NAME}</h1>
            <p>
                "Saints started as a small print run for friends and grew into a lifestyle label rooted in "
                {STORE_LOCATION}
                ". Every piece is designed for comfort first."
            </p>
            <h2>"Frequently Asked Questions"</h2>
            <Accordion entries=FAQ/>
        </section>
    }
}
