//! Smooth scrolling helpers for in-page anchors and response regions.
//!
//! Requires a browser environment; SSR paths no-op. The offset arithmetic
//! lives in [`crate::state::nav::scroll_top`] so it can be tested natively.

/// Smooth-scroll to the element with `target_id`, leaving room for the fixed
/// `.navbar` header. Returns `true` if the target exists.
pub fn scroll_to_anchor(target_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(document) = window.document() else {
            return false;
        };
        let Some(target) = document.get_element_by_id(target_id) else {
            return false;
        };
        let header_height = document
            .query_selector(".navbar")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map_or(0.0, |el| f64::from(el.offset_height()));
        let page_offset = window.page_y_offset().unwrap_or(0.0);
        let top = crate::state::nav::scroll_top(
            target.get_bounding_client_rect().top(),
            page_offset,
            header_height,
        );

        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target_id;
        false
    }
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
