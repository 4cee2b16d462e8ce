//! Gallery thumbnails and the modal image viewer.

use leptos::prelude::*;

use crate::state::lightbox::{GalleryImage, LightboxState};

#[component]
pub fn Gallery(images: Vec<GalleryImage>) -> impl IntoView {
    let lightbox = RwSignal::new(LightboxState::default());
    let close = Callback::new(move |()| lightbox.update(LightboxState::close));

    view! {
        <div class="gallery-grid">
            {images
                .into_iter()
                .map(|image| {
                    let opened = image.clone();
                    view! {
                        <img
                            class="gallery-item"
                            src=image.src
                            alt=image.alt
                            on:click=move |_| lightbox.update(|l| l.open(opened.clone()))
                        />
                    }
                })
                .collect_view()}
        </div>
        <Show when=move || lightbox.with(LightboxState::is_open)>
            <Lightbox lightbox=lightbox on_close=close/>
        </Show>
    }
}

/// Backdrop click and the close button both dismiss; clicks on the image do not.
#[component]
fn Lightbox(lightbox: RwSignal<LightboxState>, on_close: Callback<()>) -> impl IntoView {
    let src = move || lightbox.with(|l| l.current.as_ref().map(|img| img.src.clone()).unwrap_or_default());
    let caption = move || lightbox.with(|l| l.caption().to_owned());

    view! {
        <div id="lightbox" class="lightbox" style="display: flex;" on:click=move |_| on_close.run(())>
            <span class="close" title="Close" on:click=move |_| on_close.run(())>"×"</span>
            <div class="lightbox-body" on:click=move |ev| ev.stop_propagation()>
                <img id="lightbox-img" class="lightbox-content" src=src alt=caption/>
                <div id="caption" class="lightbox-caption">{caption}</div>
            </div>
        </div>
    }
}
