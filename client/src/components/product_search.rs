//! Search panel over the static catalog.

use leptos::prelude::*;

use crate::catalog::{self, NO_RESULTS_TEXT, ProductRecord, SearchOutcome};

/// Runs on button click or Enter; results replace the previous render.
#[component]
pub fn ProductSearch() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let outcome = RwSignal::new(SearchOutcome::Empty);

    let run_search = move || outcome.set(query.with_untracked(|q| catalog::search(q)));

    let results = move || match outcome.get() {
        SearchOutcome::Empty => ().into_any(),
        SearchOutcome::NoResults => view! { <p class="no-results">{NO_RESULTS_TEXT}</p> }.into_any(),
        SearchOutcome::Matches(found) => found
            .into_iter()
            .map(|product| view! { <SearchResultItem product=product/> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="search-container">
            <input
                id="searchInput"
                type="text"
                placeholder="Search products..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        run_search();
                    }
                }
            />
            <button id="searchButton" class="btn" on:click=move |_| run_search()>
                "Search"
            </button>
        </div>
        <div id="searchResults" class="search-results">
            {results}
        </div>
    }
}

/// One search hit: name, description, price and a link to its category.
#[component]
fn SearchResultItem(product: &'static ProductRecord) -> impl IntoView {
    view! {
        <div class="search-result-item">
            <h3>{product.name}</h3>
            <p>{product.description}</p>
            <p><strong>{product.price}</strong></p>
            <a href=product.view_link() class="btn">"View Product"</a>
        </div>
    }
}
