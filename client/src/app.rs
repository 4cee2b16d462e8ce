//! Root application component with routing, shared layout and context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders [`shell`] for every route and the browser hydrates
//! [`App`]. `App` provides the two pieces of state shared across the layout:
//! the nav menu (`RwSignal<NavState>`) and the cart counter
//! (`RwSignal<CartState>`). Everything else is owned by the widget that uses
//! it.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::site_footer::SiteFooter;
use crate::content::BRAND_NAME;
use crate::pages::{
    about::AboutPage, contact::ContactPage, enquiry::EnquiryPage, gallery::GalleryPage, home::HomePage,
    products::ProductsPage,
};
use crate::state::{cart::CartState, nav::NavState};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=LEAFLET_CSS/>
                <script src=LEAFLET_JS></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    let cart = RwSignal::new(CartState::default());
    provide_context(nav);
    provide_context(cart);

    view! {
        <Stylesheet id="leptos" href="/pkg/saints-site.css"/>
        <Title text=BRAND_NAME/>

        <Router>
            <div class="site" on:click=move |ev| handle_anchor_click(&ev, nav)>
                <Navbar/>
                <main class="site-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("products") view=ProductsPage/>
                        <Route path=StaticSegment("gallery") view=GalleryPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                        <Route path=StaticSegment("enquiry") view=EnquiryPage/>
                    </Routes>
                </main>
                <SiteFooter/>
            </div>
        </Router>
    }
}

/// Delegated handler for in-page `#id` links: smooth-scroll below the fixed
/// header and close the mobile menu. A bare `#` or a missing target leaves
/// the click alone.
#[cfg(feature = "hydrate")]
fn handle_anchor_click(ev: &leptos::ev::MouseEvent, nav: RwSignal<NavState>) {
    use wasm_bindgen::JsCast;

    let Some(anchor) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("a[href^='#']").ok().flatten())
    else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let Some(target) = crate::state::nav::anchor_target(&href) else {
        return;
    };
    ev.prevent_default();
    if crate::util::scroll::scroll_to_anchor(target) {
        nav.update(NavState::close_menu);
    }
}

#[cfg(not(feature = "hydrate"))]
fn handle_anchor_click(_ev: &leptos::ev::MouseEvent, _nav: RwSignal<NavState>) {}
