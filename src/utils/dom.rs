//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Read the current value of an `<input>` event's target.
pub fn event_input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

/// Read the current value of a `<select>` event's target.
pub fn event_select_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()?
        .dyn_into::<web_sys::HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

/// Reset a file input back to its empty state.
///
/// Returns `true` if the element was found and cleared.
pub fn reset_input_value(id: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(id)
        && let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>()
    {
        input.set_value("");
        true
    } else {
        false
    }
}

/// Trigger a browser-level save of `url` under `filename`.
///
/// Creates a transient anchor element and clicks it, the same mechanism a
/// user-initiated download link would use. Returns `true` on success.
pub fn trigger_download(url: &str, filename: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Ok(element) = document.create_element("a")
        && let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>()
    {
        anchor.set_href(url);
        anchor.set_download(filename);
        anchor.click();
        true
    } else {
        false
    }
}

/// Place text on the system clipboard.
///
/// Returns `true` if the clipboard accepted the write.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.is_ok()
}
