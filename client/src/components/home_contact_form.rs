//! Home page quick-contact form.

use leptos::prelude::*;

use crate::forms::home_contact::{self, EMAIL, MESSAGE, NAME};
use crate::forms::values::FormValues;
use crate::util::dialog;

#[component]
pub fn HomeContactForm() -> impl IntoView {
    let values = RwSignal::new(FormValues::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let verdict = values.with_untracked(home_contact::check);
        dialog::alert(verdict.alert_text());
        if verdict.resets_form() {
            values.update(FormValues::reset);
        }
    };

    let bind = move |id: &'static str| move || values.with(|v| v.owned(id));

    view! {
        <form id="homeContactForm" class="home-contact-form" on:submit=on_submit>
            <input
                id=NAME
                name=NAME
                type="text"
                placeholder="Your Name"
                prop:value=bind(NAME)
                on:input=move |ev| values.update(|v| v.set(NAME, event_target_value(&ev)))
            />
            <input
                id=EMAIL
                name=EMAIL
                type="email"
                placeholder="Your Email"
                prop:value=bind(EMAIL)
                on:input=move |ev| values.update(|v| v.set(EMAIL, event_target_value(&ev)))
            />
            <textarea
                id=MESSAGE
                name=MESSAGE
                rows="4"
                placeholder="Your Message"
                prop:value=bind(MESSAGE)
                on:input=move |ev| values.update(|v| v.set(MESSAGE, event_target_value(&ev)))
            ></textarea>
            <button type="submit" class="btn">"Send"</button>
        </form>
    }
}
