//! Page wiring: form submit → upload controller

use std::rc::Rc;

use sprinkles_core::{SprinklesConfig, SprinklesError, UploadController, UploadRequest};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Element, Event, File, HtmlFormElement, HtmlInputElement};

use crate::alert_dom::{self, DomAlertSurface};
use crate::dom::{self, js_error_message, to_js};
use crate::download::AnchorDownloader;
use crate::fetch::FetchTransport;

type WebController = UploadController<FetchTransport, AnchorDownloader, DomAlertSurface>;

/// PDF Sprinkles page controller
///
/// ```javascript
/// import init, { PdfSprinkles } from './pkg/sprinkles_wasm.js';
///
/// await init();
/// const sprinkles = new PdfSprinkles();             // stock markup
/// const custom = new PdfSprinkles({ fileInputId: 'upload' });
/// ```
#[wasm_bindgen]
pub struct PdfSprinkles {
    controller: Rc<WebController>,
}

#[wasm_bindgen]
impl PdfSprinkles {
    /// Attach to the page. `config` is an optional object of
    /// camelCase overrides.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PdfSprinkles, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            SprinklesConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| to_js(SprinklesError::Config(e.to_string())))?
        };
        config.validate().map_err(to_js)?;

        Self::attach(config).map_err(to_js)
    }

    /// Upload a file directly, bypassing the form. Resolves to the outcome
    /// kind, e.g. `"downloadReady"` or `"networkError"`.
    pub fn upload(&self, file: File) -> js_sys::Promise {
        let controller = self.controller.clone();
        future_to_promise(async move {
            let cookies = dom::cookies();
            let kind = controller
                .submit(UploadRequest::new(file.name(), file), &cookies)
                .await;
            Ok(JsValue::from_str(kind.as_str()))
        })
    }

    pub fn dismiss(&self) {
        self.controller.alert().dismiss();
    }

    /// `"hidden"`, `"working"`, `"success"` or `"error"`
    #[wasm_bindgen(getter, js_name = alertState)]
    pub fn alert_state(&self) -> String {
        self.controller.alert().state().as_str().to_string()
    }

    /// `{ state, title, message }` as currently shown
    #[wasm_bindgen(getter, js_name = alertFrame)]
    pub fn alert_frame(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.controller.alert().frame())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(getter, js_name = inFlight)]
    pub fn in_flight(&self) -> u32 {
        self.controller.in_flight()
    }
}

impl PdfSprinkles {
    fn attach(config: SprinklesConfig) -> Result<Self, SprinklesError> {
        let document = dom::document()?;
        let form: HtmlFormElement = dom::query_document(&document, &config.form_selector)?;
        let file_input: HtmlInputElement = dom::by_id(&document, &config.file_input_id)?;
        let alert_root: Element = dom::query_document(&document, &config.alert_selector)?;

        let alert = alert_dom::mount(alert_root)?;
        let downloader = AnchorDownloader::new(config.revoke_delay_ms);
        let controller = Rc::new(UploadController::new(
            form.action(),
            config,
            FetchTransport,
            downloader,
            alert,
        ));

        let controller_for_submit = controller.clone();
        let on_submit = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            start_upload(&controller_for_submit, &file_input);
        }) as Box<dyn FnMut(_)>);

        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            .map_err(|e| {
                SprinklesError::MissingElement(format!("form listener: {}", js_error_message(&e)))
            })?;
        on_submit.forget();

        tracing::info!(action = %form.action(), "PDF Sprinkles attached");
        Ok(Self { controller })
    }
}

fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

fn start_upload(controller: &Rc<WebController>, input: &HtmlInputElement) {
    let Some(file) = selected_file(input) else {
        controller.reject(&SprinklesError::NoFile);
        return;
    };

    let controller = controller.clone();
    let cookies = dom::cookies();
    spawn_local(async move {
        controller
            .submit(UploadRequest::new(file.name(), file), &cookies)
            .await;
    });
}
