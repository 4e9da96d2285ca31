//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Trigger a browser download of `contents` as a JSON text file.
///
/// Creates a Blob, wraps it in an object URL, clicks a transient anchor
/// element, and revokes the URL afterwards. Returns `true` when the download
/// was handed to the browser.
pub fn download_json_file(filename: &str, contents: &str) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };

    let parts = js_sys::Array::new();
    parts.push(&contents.into());
    let options = BlobPropertyBag::new();
    options.set_type("application/json");

    let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return false;
    };
    let Ok(url) = Url::create_object_url_with_blob(&blob) else {
        return false;
    };

    let Ok(element) = document.create_element("a") else {
        let _ = Url::revoke_object_url(&url);
        return false;
    };
    let anchor = element.unchecked_into::<HtmlAnchorElement>();
    anchor.set_href(&url);
    anchor.set_download(filename);

    let _ = body.append_child(&anchor);
    anchor.click();
    anchor.remove();
    let _ = Url::revoke_object_url(&url);
    true
}
