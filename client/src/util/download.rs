//! Client-side file download of generated text content.
//!
//! Client-side (hydrate): a `Blob` is wrapped in an object URL, attached to a
//! hidden anchor with a `download` attribute and clicked. The anchor is
//! removed and the URL revoked shortly after.
//! Elsewhere there is no browser to save into, so the call fails with
//! [`DownloadError::Unavailable`].

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

pub const TEXT_PLAIN: &str = "text/plain";

/// A generated file ready to hand to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFile {
    pub name: String,
    pub mime: &'static str,
    pub contents: String,
}

impl TextFile {
    pub fn plain(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self { name: name.into(), mime: TEXT_PLAIN, contents: contents.into() }
    }
}

/// Why a download could not be triggered.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("file downloads are only available in the browser")]
    Unavailable,
    #[error("browser rejected the download: {0}")]
    Browser(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DownloadError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Hand `file` to the browser as a download.
///
/// # Errors
///
/// Returns an error when no document is available or any DOM call fails.
pub fn save_text_file(file: &TextFile) -> Result<(), DownloadError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(DownloadError::Unavailable)?;
        let body = document.body().ok_or(DownloadError::Unavailable)?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&file.contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(file.mime);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")?
            .dyn_into()
            .map_err(|_| DownloadError::Browser("anchor element cast failed".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(&file.name);
        anchor.style().set_property("display", "none")?;
        body.append_child(&anchor)?;
        anchor.click();

        let cleanup_ms = u32::try_from(crate::content::DOWNLOAD_CLEANUP.as_millis()).unwrap_or(100);
        gloo_timers::callback::Timeout::new(cleanup_ms, move || {
            anchor.remove();
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file;
        Err(DownloadError::Unavailable)
    }
}
