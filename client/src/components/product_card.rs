//! Product tile with an add-to-cart button.
//!
//! Each card owns its [`AddButtonFeedback`]; the cart counter is the shared
//! `RwSignal<CartState>` from context.

use leptos::prelude::*;

use crate::catalog::ProductRecord;
use crate::state::cart::{AddButtonFeedback, CartState};

#[component]
pub fn ProductCard(product: &'static ProductRecord) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let feedback = RwSignal::new(AddButtonFeedback::default());

    let on_add = move |_| {
        let count = cart.try_update(CartState::add_item).unwrap_or_default();
        let seq = feedback.try_update(AddButtonFeedback::flash).unwrap_or_default();
        leptos::logging::log!("added {} to cart ({count} items)", product.name);
        schedule_revert(feedback, seq);
    };

    let background = move || {
        feedback.with(|f| f.background().map(|c| format!("background-color: {c};")).unwrap_or_default())
    };

    view! {
        <div class="product-card" id=product.category>
            <h3>{product.name}</h3>
            <p class="product-description">{product.description}</p>
            <p class="price">{product.price}</p>
            <button class="btn add-to-cart" style=background on:click=on_add>
                {move || feedback.with(AddButtonFeedback::label)}
            </button>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn schedule_revert(feedback: RwSignal<AddButtonFeedback>, seq: u64) {
    let millis = u32::try_from(crate::content::CART_FEEDBACK.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::callback::Timeout::new(millis, move || {
        feedback.try_update(|f| f.revert(seq));
    })
    .forget();
}

#[cfg(not(feature = "hydrate"))]
fn schedule_revert(_feedback: RwSignal<AddButtonFeedback>, _seq: u64) {}
