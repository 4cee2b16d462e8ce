//! Modal image viewer state for the gallery page.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

/// A gallery image; `alt` doubles as the lightbox caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into() }
    }
}

/// The image currently shown in the lightbox, if open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub current: Option<GalleryImage>,
}

impl LightboxState {
    pub fn open(&mut self, image: GalleryImage) {
        self.current = Some(image);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn caption(&self) -> &str {
        self.current.as_ref().map_or("", |img| img.alt.as_str())
    }
}
