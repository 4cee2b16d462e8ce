//! FAQ accordion with at most one panel open.

use leptos::prelude::*;

use crate::state::accordion::AccordionState;

/// A question and its answer.
#[derive(Clone, Copy, Debug)]
pub struct AccordionEntry {
    pub title: &'static str,
    pub body: &'static str,
}

#[component]
pub fn Accordion(entries: &'static [AccordionEntry]) -> impl IntoView {
    let state = RwSignal::new(AccordionState::default());

    view! {
        <div class="accordion">
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let open = move || state.with(|s| s.is_open(index));
                    view! {
                        <div class="accordion-item" class:active=open>
                            <button
                                class="accordion-header"
                                aria-expanded=move || open().to_string()
                                on:click=move |_| state.update(|s| s.toggle(index))
                            >
                                {entry.title}
                            </button>
                            <div class="accordion-content" style=move || if open() { "display: block;" } else { "display: none;" }>
                                <p>{entry.body}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
