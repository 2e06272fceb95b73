//! `fetch`-backed transport

use sprinkles_core::{HttpResponse, PreparedUpload, SprinklesError, Transport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, Request, RequestInit, Response};

use crate::dom::{self, js_error_message};

/// Posts the raw file with `window.fetch`. The browser picks the
/// content type from the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

pub struct FetchResponse(Response);

fn transport_error(value: JsValue) -> SprinklesError {
    SprinklesError::Transport(js_error_message(&value))
}

fn body_error(value: JsValue) -> SprinklesError {
    SprinklesError::Body(js_error_message(&value))
}

impl Transport for FetchTransport {
    type Payload = File;
    type Blob = Blob;
    type Response = FetchResponse;

    async fn send(&self, upload: PreparedUpload<File>) -> Result<FetchResponse, SprinklesError> {
        let window = dom::window()?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&upload.payload);

        let request = Request::new_with_str_and_init(&upload.url, &opts).map_err(transport_error)?;
        if let Some((header, token)) = &upload.xsrf {
            request
                .headers()
                .set(header, token)
                .map_err(transport_error)?;
        }

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_error)?;
        let response: Response = response.dyn_into().map_err(transport_error)?;

        Ok(FetchResponse(response))
    }
}

impl HttpResponse for FetchResponse {
    type Blob = Blob;

    fn status(&self) -> u16 {
        self.0.status()
    }

    fn is_success(&self) -> bool {
        self.0.ok()
    }

    async fn text(self) -> Result<String, SprinklesError> {
        let text = JsFuture::from(self.0.text().map_err(body_error)?)
            .await
            .map_err(body_error)?;
        text.as_string()
            .ok_or_else(|| SprinklesError::Body("response text is not a string".to_string()))
    }

    async fn blob(self) -> Result<Blob, SprinklesError> {
        let blob = JsFuture::from(self.0.blob().map_err(body_error)?)
            .await
            .map_err(body_error)?;
        blob.dyn_into::<Blob>().map_err(body_error)
    }
}
