//! Labelled form control paired with its inline error slot.
//!
//! DESIGN
//! ======
//! Every control reads and writes one entry of a shared
//! `RwSignal<FormValues>`. Its error slot (`{id}Error`) renders whatever the
//! form's `RwSignal<FieldErrors>` holds for that id, and blur re-validates just
//! this field against the form's rule table.

use leptos::prelude::*;

use crate::content::FIELD_ERROR_BORDER;
use crate::forms::validate::{FieldErrors, FieldRule, error_slot_id, rule_for, validate_field};
use crate::forms::values::FormValues;

/// Which control to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    TextArea,
    /// `<select>` with `(value, label)` options after an empty placeholder.
    Select(&'static [(&'static str, &'static str)]),
}

impl FieldKind {
    fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Text | Self::TextArea | Self::Select(_) => "text",
        }
    }
}

/// Re-validate `id` alone and update its error slot.
pub fn validate_on_blur(
    rules: &[FieldRule],
    id: &'static str,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
) {
    let Some(rule) = rule_for(rules, id) else {
        return;
    };
    let outcome = values.with_untracked(|v| validate_field(rule, v.get(id)));
    errors.update(|e| match outcome {
        Ok(()) => {
            e.remove(id);
        }
        Err(err) => {
            e.insert(id, err);
        }
    });
}

#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    kind: FieldKind,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
    rules: &'static [FieldRule],
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let required = rule_for(rules, id).is_some_and(|r| r.required);
    let current = move || values.with(|v| v.owned(id));
    let on_blur = move |_| validate_on_blur(rules, id, values, errors);
    let border = move || {
        if errors.with(|e| e.contains_key(id)) {
            format!("border-color: {FIELD_ERROR_BORDER};")
        } else {
            String::new()
        }
    };
    let message = move || errors.with(|e| e.get(id).map(ToString::to_string).unwrap_or_default());

    let control = match kind {
        FieldKind::TextArea => view! {
            <textarea
                id=id
                name=id
                rows="5"
                placeholder=placeholder
                required=required
                style=border
                prop:value=current
                on:input=move |ev| values.update(|v| v.set(id, event_target_value(&ev)))
                on:blur=on_blur
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=id
                name=id
                required=required
                style=border
                prop:value=current
                on:change=move |ev| values.update(|v| v.set(id, event_target_value(&ev)))
                on:blur=on_blur
            >
                <option value="">"Please select"</option>
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        _ => view! {
            <input
                id=id
                name=id
                type=kind.input_type()
                placeholder=placeholder
                required=required
                style=border
                prop:value=current
                on:input=move |ev| values.update(|v| v.set(id, event_target_value(&ev)))
                on:blur=on_blur
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=id>{label}{required.then_some(" *")}</label>
            {control}
            <span class="error-message" id=error_slot_id(id)>{message}</span>
        </div>
    }
}
