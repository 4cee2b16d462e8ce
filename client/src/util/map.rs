//! Store location map backed by the Leaflet library.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaflet is loaded by the page shell as the global `L`; this module only
//! binds the handful of calls the contact page needs (`map`, `tileLayer`,
//! `marker`, `popup`). Initialisation is skipped when the container is
//! missing or Leaflet throws.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use crate::content::{BRAND_NAME, STORE_COORDINATE, STORE_LOCATION};

/// Element id of the map container on the contact page.
pub const MAP_CONTAINER_ID: &str = "map";

/// Fixed view and marker settings for the store map.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreMapConfig {
    pub center: (f64, f64),
    pub zoom: u8,
    pub tile_url: &'static str,
    pub attribution: &'static str,
    pub marker_popup_html: String,
}

impl Default for StoreMapConfig {
    fn default() -> Self {
        Self {
            center: STORE_COORDINATE,
            zoom: 13,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            attribution: "© OpenStreetMap contributors",
            marker_popup_html: format!("<b>{BRAND_NAME}</b><br>{STORE_LOCATION}"),
        }
    }
}

/// Popup text for a click at (`lat`, `lng`), in Leaflet's `LatLng(...)` form.
pub fn click_popup_text(lat: f64, lng: f64) -> String {
    format!("You clicked the map at LatLng({}, {})", format_coord(lat), format_coord(lng))
}

/// Round to six decimals and drop trailing zeros, like `L.Util.formatNum`.
fn format_coord(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    let text = format!("{rounded:.6}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_owned() } else { text.to_owned() }
}

#[cfg(feature = "hydrate")]
mod leaflet {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Map;
        pub type TileLayer;
        pub type Marker;
        pub type Popup;

        #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
        pub fn map(container_id: &str) -> Result<Map, JsValue>;
        #[wasm_bindgen(method, js_name = setView)]
        pub fn set_view(this: &Map, center: &JsValue, zoom: u8) -> Map;
        #[wasm_bindgen(method)]
        pub fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

        #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
        pub fn tile_layer(url: &str, options: &JsValue) -> TileLayer;
        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

        #[wasm_bindgen(js_namespace = L, js_name = marker)]
        pub fn marker(latlng: &JsValue) -> Marker;
        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &Marker, map: &Map) -> Marker;
        #[wasm_bindgen(method, js_name = bindPopup)]
        pub fn bind_popup(this: &Marker, html: &str) -> Marker;
        #[wasm_bindgen(method, js_name = openPopup)]
        pub fn open_popup(this: &Marker) -> Marker;

        #[wasm_bindgen(js_namespace = L, js_name = popup)]
        pub fn popup() -> Popup;
        #[wasm_bindgen(method, js_name = setLatLng)]
        pub fn set_lat_lng(this: &Popup, latlng: &JsValue) -> Popup;
        #[wasm_bindgen(method, js_name = setContent)]
        pub fn set_content(this: &Popup, html: &str) -> Popup;
        #[wasm_bindgen(method, js_name = openOn)]
        pub fn open_on(this: &Popup, map: &Map) -> Popup;
    }
}

/// Render the store map into [`MAP_CONTAINER_ID`] if that element exists.
pub fn init_store_map(config: &StoreMapConfig) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let has_container = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MAP_CONTAINER_ID))
            .is_some();
        if !has_container {
            return;
        }

        let center: JsValue = js_sys::Array::of2(&config.center.0.into(), &config.center.1.into()).into();
        let map = match leaflet::map(MAP_CONTAINER_ID) {
            Ok(map) => map,
            Err(err) => {
                leptos::logging::warn!("store map init failed: {err:?}");
                return;
            }
        };
        map.set_view(&center, config.zoom);

        let tile_options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&tile_options, &"attribution".into(), &config.attribution.into());
        leaflet::tile_layer(config.tile_url, &tile_options).add_to(&map);

        leaflet::marker(&center)
            .add_to(&map)
            .bind_popup(&config.marker_popup_html)
            .open_popup();

        let click_map = map.clone();
        let on_click = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let Ok(latlng) = js_sys::Reflect::get(&event, &"latlng".into()) else {
                return;
            };
            let coord = |key: &str| {
                js_sys::Reflect::get(&latlng, &key.into())
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or_default()
            };
            leaflet::popup()
                .set_lat_lng(&latlng)
                .set_content(&click_popup_text(coord("lat"), coord("lng")))
                .open_on(&click_map);
        });
        map.on("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}
