//! JavaScript-facing typesetting API
//!
//! Thin wrappers over the parser and typesetter: deserialize the arguments,
//! run the operation, serialize the result. Errors cross the boundary as
//! `JsValue` strings.

use crate::api::helpers::{deserialize, js_error, serialize};
use crate::models::ruby::RubyAnnotation;
use crate::models::work::Work;
use crate::parse::aozora::parse_ruby_text;
use crate::renderers::escape;
use crate::renderers::paragraph::{TypesetOptions, Typesetter};
use crate::{wasm_info, wasm_log};
use wasm_bindgen::prelude::*;

/// Typeset text plus ruby annotations into one markup string.
///
/// `annotations_js` is a JavaScript array of `{start, base, ruby}` objects
/// with `start` counting characters into `text`.
#[wasm_bindgen(js_name = processParagraphs)]
pub fn process_paragraphs(text: &str, annotations_js: JsValue) -> Result<String, JsValue> {
    let annotations = annotations_from_js(annotations_js)?;
    wasm_log!(
        "processParagraphs: {} chars, {} annotations",
        text.chars().count(),
        annotations.len()
    );

    Typesetter::new()
        .process_paragraphs(text, &annotations)
        .map_err(js_error)
}

/// Typeset with explicit options (see `TypesetOptions`)
#[wasm_bindgen(js_name = processParagraphsWithOptions)]
pub fn process_paragraphs_with_options(
    text: &str,
    annotations_js: JsValue,
    options_js: JsValue,
) -> Result<String, JsValue> {
    let annotations = annotations_from_js(annotations_js)?;
    let options: TypesetOptions = deserialize(options_js, "Failed to deserialize options")?;

    Typesetter::with_options(options)
        .process_paragraphs(text, &annotations)
        .map_err(js_error)
}

/// Typeset into an array of per-paragraph fragments, for paginating views
#[wasm_bindgen(js_name = typesetFragments)]
pub fn typeset_fragments(text: &str, annotations_js: JsValue) -> Result<js_sys::Array, JsValue> {
    let annotations = annotations_from_js(annotations_js)?;

    let fragments = Typesetter::new()
        .typeset_fragments(text, &annotations)
        .map_err(js_error)?;

    let array = js_sys::Array::new();
    for fragment in &fragments {
        array.push(&JsValue::from_str(fragment));
    }
    Ok(array)
}

/// Escape HTML-significant characters in a text value.
///
/// `null` and `undefined` yield the empty string.
#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html(text: Option<String>) -> String {
    escape::escape_html_opt(text.as_deref())
}

/// Parse Aozora-style ruby markup into `{text, annotations}`
#[wasm_bindgen(js_name = parseRubyText)]
pub fn parse_ruby_text_js(source: &str) -> Result<JsValue, JsValue> {
    let parsed = parse_ruby_text(source).map_err(js_error)?;
    serialize(&parsed, "Failed to serialize parsed text")
}

/// Typeset a whole work object (`{title, author, text, annotations}`)
#[wasm_bindgen(js_name = renderWork)]
pub fn render_work(work_js: JsValue) -> Result<String, JsValue> {
    let work: Work = deserialize(work_js, "Failed to deserialize work")?;
    wasm_info!(
        "renderWork: '{}' ({} paragraphs)",
        work.title,
        work.paragraph_count()
    );

    Typesetter::new()
        .process_paragraphs(&work.text, &work.annotations)
        .map_err(js_error)
}

/// Serialize a work to a JSON string, for export and debugging
#[wasm_bindgen(js_name = workToJson)]
pub fn work_to_json(work_js: JsValue) -> Result<String, JsValue> {
    let work: Work = deserialize(work_js, "Failed to deserialize work")?;
    serde_json::to_string(&work).map_err(js_error)
}

fn annotations_from_js(annotations_js: JsValue) -> Result<Vec<RubyAnnotation>, JsValue> {
    if annotations_js.is_null() || annotations_js.is_undefined() {
        return Ok(Vec::new());
    }
    deserialize(annotations_js, "Failed to deserialize ruby annotations")
}
