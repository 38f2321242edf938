//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. The text is passed through verbatim and the
//! outcome is reported to a callback; failures never escape this boundary.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard and report the outcome.
///
/// # Example
/// ```ignore
/// copy_to_clipboard("Hello, World!", |result| log::info!("{result:?}"));
/// ```
pub fn copy_to_clipboard<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        on_done(write_text(&text).await);
    });
}

async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window object")?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
