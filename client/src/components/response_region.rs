//! Region that shows a form flow's success or failure message.

use leptos::prelude::*;

use crate::state::submission::{ResponseMessage, SubmissionState};

/// Hidden until the flow stores a response; `white-space: pre-line` keeps the
/// enquiry text's paragraph break.
#[component]
pub fn ResponseRegion(id: &'static str, submission: RwSignal<SubmissionState>) -> impl IntoView {
    let class = move || {
        submission.with(|s| s.response.as_ref().map_or("response-message", ResponseMessage::class))
    };
    let style = move || {
        if submission.with(|s| s.response.is_some()) {
            "display: block; white-space: pre-line;"
        } else {
            "display: none;"
        }
    };
    let text = move || submission.with(|s| s.response.as_ref().map(|r| r.text.clone()).unwrap_or_default());

    view! {
        <div id=id class=class style=style role="status">
            {text}
        </div>
    }
}
