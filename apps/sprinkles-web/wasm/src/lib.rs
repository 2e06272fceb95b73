//! WASM front end for PDF Sprinkles
//!
//! Uploads the PDF picked in the page's form to the OCR backend and
//! downloads the searchable PDF it returns. The upload flow and alert state
//! live in `sprinkles-core`; this crate supplies the browser pieces:
//!
//! - [`alert_dom`]: renders the alert box into the page
//! - [`fetch`]: posts the file with `window.fetch`
//! - [`download`]: saves the result through an object URL
//! - [`app`]: finds the form and wires submit events to the controller
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { PdfSprinkles } from './pkg/sprinkles_wasm.js';
//!
//! await init();
//! new PdfSprinkles();
//! ```

pub mod alert_dom;
pub mod app;
pub mod dom;
pub mod download;
pub mod fetch;

use wasm_bindgen::prelude::*;

pub use app::PdfSprinkles;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "PDF Sprinkles WASM initialized");
}

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Value of cookie `name` from `document.cookie`, if set
#[wasm_bindgen(js_name = readCookie)]
pub fn read_cookie(name: &str) -> Option<String> {
    sprinkles_core::read_cookie(&dom::cookies(), name)
}

/// Upload endpoint for `filename` under the given form action
#[wasm_bindgen(js_name = uploadUrl)]
pub fn upload_url(action: &str, filename: &str) -> String {
    sprinkles_core::upload_url(action, "filename", filename)
}
