//! DOM lookup helpers and `JsValue` error conversion

use sprinkles_core::SprinklesError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, Window};

pub fn window() -> Result<Window, SprinklesError> {
    web_sys::window().ok_or_else(|| SprinklesError::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document, SprinklesError> {
    window()?
        .document()
        .ok_or_else(|| SprinklesError::MissingElement("document".to_string()))
}

/// First element matching `selector`, cast to `T`
pub fn query<T: JsCast>(parent: &Element, selector: &str) -> Result<T, SprinklesError> {
    let found = parent
        .query_selector(selector)
        .map_err(|e| SprinklesError::MissingElement(format!("{}: {}", selector, js_error_message(&e))))?;
    cast(found, selector)
}

/// Document-level variant of [`query`]
pub fn query_document<T: JsCast>(document: &Document, selector: &str) -> Result<T, SprinklesError> {
    let found = document
        .query_selector(selector)
        .map_err(|e| SprinklesError::MissingElement(format!("{}: {}", selector, js_error_message(&e))))?;
    cast(found, selector)
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, SprinklesError> {
    cast(document.get_element_by_id(id), &format!("#{}", id))
}

fn cast<T: JsCast>(found: Option<Element>, what: &str) -> Result<T, SprinklesError> {
    found
        .ok_or_else(|| SprinklesError::MissingElement(what.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SprinklesError::MissingElement(format!("{} has the wrong element type", what)))
}

/// The page's `document.cookie`, empty when unavailable
pub fn cookies() -> String {
    document()
        .ok()
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

/// Human-readable description of a thrown JS value.
///
/// `Error` instances (including the `TypeError` fetch rejects with) give
/// their `message`; strings pass through; anything else is debug-printed.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(s) = value.as_string() {
        return s;
    }
    format!("{:?}", value)
}

pub fn to_js(err: SprinklesError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_type_error_message() {
        let err = js_sys::TypeError::new("Failed to fetch");
        assert_eq!(js_error_message(&err.into()), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn test_string_passes_through() {
        assert_eq!(js_error_message(&JsValue::from_str("boom")), "boom");
    }

    #[wasm_bindgen_test]
    fn test_missing_id() {
        let document = document().unwrap();
        let found = by_id::<web_sys::HtmlInputElement>(&document, "no-such-input");
        assert_eq!(
            found.err(),
            Some(SprinklesError::MissingElement("#no-such-input".to_string()))
        );
    }
}
