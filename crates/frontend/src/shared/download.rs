//! File download export
//!
//! Serializes text into a Blob, routes it through a temporary object URL and
//! a synthetic anchor click, and releases both before returning.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const MARKDOWN_MIME: &str = "text/markdown;charset=utf-8";

/// Offer `text` as a downloadable markdown file named `filename`.
pub fn download_markdown(text: &str, filename: &str) -> Result<(), String> {
    let blob = create_text_blob(text)?;
    download_blob(&blob, filename)
}

fn create_text_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(MARKDOWN_MIME);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {e:?}"))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {e:?}"))?;

    // The object URL is revoked whether or not the click succeeded.
    let clicked = click_anchor(&document, &url, filename);
    let revoked =
        Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {e:?}"));

    clicked.and(revoked)
}

fn click_anchor(document: &web_sys::Document, url: &str, filename: &str) -> Result<(), String> {
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {e:?}"))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {e:?}"))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .set_attribute("style", "display: none")
        .map_err(|e| format!("Failed to style anchor: {e:?}"))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {e:?}"))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {e:?}"))?;

    Ok(())
}
