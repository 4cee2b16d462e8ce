//! Leaflet store map container.

use leptos::prelude::*;

use crate::util::map::{self, MAP_CONTAINER_ID, StoreMapConfig};

/// Initialised once after the container mounts.
#[component]
pub fn StoreMap() -> impl IntoView {
    Effect::new(move |_| map::init_store_map(&StoreMapConfig::default()));

    view! { <div id=MAP_CONTAINER_ID class="store-map" style="height: 400px;"></div> }
}
