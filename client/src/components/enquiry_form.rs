//! Enquiry page form: validation, simulated processing, confirmation download.

use leptos::prelude::*;

use super::form_field::{FieldKind, FormField};
use super::response_region::ResponseRegion;
use crate::catalog::PRODUCT_OPTIONS;
use crate::forms::enquiry::{
    self, EMAIL, ENQUIRY_TYPE, ENQUIRY_TYPES, MESSAGE, NAME, PHONE, PRODUCT, QUANTITY, RESPONSE_REGION_ID, RULES,
};
use crate::forms::validate::FieldErrors;
use crate::forms::values::FormValues;
use crate::state::submission::{ResponseKind, SubmissionState};
use crate::util::{clock, download, scroll};

#[component]
pub fn EnquiryForm() -> impl IntoView {
    let values = RwSignal::new(FormValues::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submission = RwSignal::new(enquiry::submission_state());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submission.with_untracked(SubmissionState::is_busy) {
            return;
        }
        errors.set(FieldErrors::new());
        let prepared = values.with_untracked(|v| enquiry::prepare(v, clock::now()));
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
            let response = enquiry::run(data, download::save_text_file).await;
            let succeeded = response.kind == ResponseKind::Success;
            submission.update(|s| s.finish(response));
            if succeeded {
                values.update(FormValues::reset);
                scroll::scroll_into_view(RESPONSE_REGION_ID);
            }
        });
    };

    view! {
        <form id="enquiryForm" class="enquiry-form" novalidate=true on:submit=on_submit>
            <FormField id=NAME label="Full Name" kind=FieldKind::Text values=values errors=errors rules=RULES/>
            <FormField id=EMAIL label="Email Address" kind=FieldKind::Email values=values errors=errors rules=RULES/>
            <FormField id=PHONE label="Phone Number" kind=FieldKind::Tel values=values errors=errors rules=RULES/>
            <FormField
                id=ENQUIRY_TYPE
                label="Enquiry Type"
                kind=FieldKind::Select(ENQUIRY_TYPES)
                values=values
                errors=errors
                rules=RULES
            />
            <FormField
                id=PRODUCT
                label="Product of Interest"
                kind=FieldKind::Select(PRODUCT_OPTIONS)
                values=values
                errors=errors
                rules=RULES
            />
            <FormField
                id=QUANTITY
                label="Estimated Quantity"
                kind=FieldKind::Number
                values=values
                errors=errors
                rules=RULES
                placeholder="1 - 1000"
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
