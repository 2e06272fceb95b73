//! Object-URL download trigger

use sprinkles_core::{Downloader, SprinklesError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::dom::{self, js_error_message};

/// Clicks a temporary `<a download>` pointing at an object URL for the
/// blob. The URL is revoked after `revoke_delay_ms` so long-lived pages
/// don't pin every processed file in memory.
#[derive(Debug, Clone, Copy)]
pub struct AnchorDownloader {
    revoke_delay_ms: u32,
}

impl AnchorDownloader {
    pub fn new(revoke_delay_ms: u32) -> Self {
        Self { revoke_delay_ms }
    }
}

fn download_error(value: JsValue) -> SprinklesError {
    SprinklesError::Download(js_error_message(&value))
}

impl Downloader for AnchorDownloader {
    type Blob = Blob;

    fn download(&self, blob: Blob, filename: &str) -> Result<(), SprinklesError> {
        let url = Url::create_object_url_with_blob(&blob).map_err(download_error)?;
        let clicked = click_link(&url, filename);
        schedule_revoke(url, self.revoke_delay_ms);
        clicked
    }
}

fn click_link(url: &str, filename: &str) -> Result<(), SprinklesError> {
    let link: HtmlAnchorElement = dom::document()?
        .create_element("a")
        .map_err(download_error)?
        .dyn_into()
        .map_err(|_| SprinklesError::Download("<a> is not an anchor element".to_string()))?;
    link.set_href(url);
    link.set_download(filename);
    link.click();
    Ok(())
}

fn schedule_revoke(url: String, delay_ms: u32) {
    let revoke = Closure::once_into_js(move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            tracing::warn!(error = %js_error_message(&e), "failed to revoke object URL");
        }
    });

    let scheduled = dom::window().map_err(|e| e.to_string()).and_then(|window| {
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                revoke.unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .map_err(|e| js_error_message(&e))
    });
    if let Err(e) = scheduled {
        tracing::warn!(error = %e, "failed to schedule object URL release");
    }
}
