//! Fixed site header: brand, route links, cart badge and mobile menu toggle.

use leptos::prelude::*;

use crate::content::BRAND_NAME;
use crate::state::cart::CartState;
use crate::state::nav::NavState;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/products", "Products"),
    ("/gallery", "Gallery"),
    ("/about", "About"),
    ("/contact", "Contact"),
    ("/enquiry", "Enquiry"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    let menu_open = move || nav.with(|n| n.menu_open);

    view! {
        <header class="navbar">
            <div class="nav-container">
                <a class="nav-logo" href="/">{BRAND_NAME}</a>
                <ul class="nav-menu" class:active=menu_open>
                    {LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="nav-item">
                                    <a class="nav-link" href=*href on:click=move |_| nav.update(NavState::close_menu)>
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <span class="cart-count" title="Items in cart">{move || cart.with(|c| c.count)}</span>
                <button
                    class="hamburger"
                    class:active=menu_open
                    aria-label="Toggle navigation"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </header>
    }
}
