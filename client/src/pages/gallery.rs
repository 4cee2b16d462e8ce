//! Lookbook gallery.
//!
//! Images are served by the host from `public/images` under `/assets/images`.
//! The shipped files are placeholders; replace them with photography at
//! deploy time, keeping the names.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;

use crate::components::lightbox::Gallery;
use crate::state::lightbox::GalleryImage;

const IMAGES: &[(&str, &str)] = &[
    ("/assets/images/gallery-hoodie.svg", "Premium Hoodie in charcoal"),
    ("/assets/images/gallery-beanie.svg", "Classic Beanie on the Sabie trail"),
    ("/assets/images/gallery-jeans.svg", "Slim Fit Jeans street shoot"),
    ("/assets/images/gallery-store.svg", "The Saints store front"),
    ("/assets/images/gallery-team.svg", "The Saints team"),
    ("/assets/images/gallery-launch.svg", "Winter collection launch"),
];

#[component]
pub fn GalleryPage() -> impl IntoView {
    let images = IMAGES.iter().map(|(src, alt)| GalleryImage::new(*src, *alt)).collect();

    view! {
        <section class="gallery-page">
            <h1>"Gallery"</h1>
            <Gallery images=images/>
        </section>
    }
}
