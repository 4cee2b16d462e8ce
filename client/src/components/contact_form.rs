//! Contact page form: inline validation, simulated send, thank-you message.

use leptos::prelude::*;

use super::form_field::{FieldKind, FormField};
use super::response_region::ResponseRegion;
use crate::forms::contact::{self, EMAIL, MESSAGE, MESSAGE_TYPE, NAME, PHONE, RESPONSE_REGION_ID, RULES};
use crate::forms::validate::FieldErrors;
use crate::forms::values::FormValues;
use crate::state::submission::SubmissionState;
use crate::util::scroll;

#[component]
pub fn ContactForm() -> impl IntoView {
    let values = RwSignal::new(FormValues::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submission = RwSignal::new(contact::submission_state());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submission.with_untracked(SubmissionState::is_busy) {
            return;
        }
        errors.set(FieldErrors::new());
        let prepared = values.with_untracked(contact::prepare);
        let data = match prepared {
            Ok(data) => data,
            Err(failed) => {
                errors.set(failed);
                return;
            }
        };
        let mut started = false;
        submission.update(|s| started = s.begin());
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            let response = contact::submit(data).await;
            submission.update(|s| s.finish(response));
            values.update(FormValues::reset);
            scroll::scroll_into_view(RESPONSE_REGION_ID);
        });
    };

    view! {
        <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
            <FormField id=NAME label="Full Name" kind=FieldKind::Text values=values errors=errors rules=RULES/>
            <FormField id=EMAIL label="Email Address" kind=FieldKind::Email values=values errors=errors rules=RULES/>
            <FormField id=PHONE label="Phone Number" kind=FieldKind::Tel values=values errors=errors rules=RULES placeholder="+27 ..."/>
            <FormField
                id=MESSAGE_TYPE
                label="Message Type"
                kind=FieldKind::Select(contact::MESSAGE_TYPES)
                values=values
                errors=errors
                rules=RULES
            />
            <FormField id=MESSAGE label="Message" kind=FieldKind::TextArea values=values errors=errors rules=RULES/>
            <button
                type="submit"
                class="btn"
                disabled=move || submission.with(SubmissionState::is_busy)
            >
                {move || submission.with(SubmissionState::button_label)}
            </button>
        </form>
        <ResponseRegion id=RESPONSE_REGION_ID submission=submission/>
    }
}
