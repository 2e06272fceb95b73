//! DOM rendering for the alert box
//!
//! Expected markup:
//!
//! ```html
//! <div class="alert visually-hidden">
//!   <span class="alert-title"></span>
//!   <span class="alert-text"></span>
//!   <button class="dismiss" hidden>Dismiss</button>
//! </div>
//! ```

use std::rc::Rc;

use sprinkles_core::{AlertBox, AlertFrame, AlertStyle, AlertSurface, SprinklesError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::{self, js_error_message};

const HIDDEN_CLASS: &str = "visually-hidden";

pub struct DomAlertSurface {
    root: Element,
    title: HtmlElement,
    text: HtmlElement,
    dismiss: Element,
}

impl DomAlertSurface {
    pub fn find(root: Element) -> Result<Self, SprinklesError> {
        Ok(Self {
            title: dom::query(&root, ".alert-title")?,
            text: dom::query(&root, ".alert-text")?,
            dismiss: dom::query(&root, ".dismiss")?,
            root,
        })
    }

    fn apply(&self, frame: &AlertFrame) -> Result<(), JsValue> {
        self.title.set_inner_text(&frame.title);
        self.text.set_inner_text(&frame.message);

        let classes = self.root.class_list();
        match frame.state.style() {
            Some(style) => {
                for s in AlertStyle::ALL {
                    classes.remove_1(s.class_name())?;
                }
                classes.add_1(style.class_name())?;
                classes.remove_1(HIDDEN_CLASS)?;
                self.dismiss.remove_attribute("hidden")?;
            }
            None => {
                classes.add_1(HIDDEN_CLASS)?;
                self.dismiss.set_attribute("hidden", "")?;
            }
        }
        Ok(())
    }
}

impl AlertSurface for DomAlertSurface {
    fn render(&self, frame: &AlertFrame) {
        if let Err(e) = self.apply(frame) {
            tracing::warn!(error = %js_error_message(&e), "failed to update alert");
        }
    }
}

/// Build the alert box for `root` and wire its dismiss button.
/// The click listener lives as long as the page.
pub fn mount(root: Element) -> Result<Rc<AlertBox<DomAlertSurface>>, SprinklesError> {
    let surface = DomAlertSurface::find(root)?;
    let dismiss_button = surface.dismiss.clone();
    let alert = Rc::new(AlertBox::new(surface));

    let alert_for_click = alert.clone();
    let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        alert_for_click.dismiss();
    }) as Box<dyn FnMut(_)>);

    dismiss_button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| SprinklesError::MissingElement(format!(".dismiss: {}", js_error_message(&e))))?;
    on_click.forget();

    Ok(alert)
}

#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use sprinkles_core::AlertState;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn alert_markup() -> Element {
        let document = dom::document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_class_name("alert visually-hidden");
        root.set_inner_html(
            r#"<span class="alert-title"></span><span class="alert-text"></span><button class="dismiss" hidden>x</button>"#,
        );
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    fn test_show_working_renders_dom() {
        let root = alert_markup();
        let alert = mount(root.clone()).unwrap();

        alert.show_working("Uploading file to Document AI");

        let classes = root.class_list();
        assert!(classes.contains("alert-working"));
        assert!(!classes.contains("visually-hidden"));
        let title: HtmlElement = dom::query(&root, ".alert-title").unwrap();
        assert_eq!(title.inner_text(), "Working");
        let dismiss: Element = dom::query(&root, ".dismiss").unwrap();
        assert!(!dismiss.has_attribute("hidden"));
    }

    #[wasm_bindgen_test]
    fn test_state_change_replaces_style_class() {
        let root = alert_markup();
        let alert = mount(root.clone()).unwrap();

        alert.show_working("a");
        alert.show_error("b");

        let classes = root.class_list();
        assert!(classes.contains("alert-error"));
        assert!(!classes.contains("alert-working"));
        assert!(!classes.contains("alert-success"));
    }

    #[wasm_bindgen_test]
    fn test_dismiss_click_hides_alert() {
        let root = alert_markup();
        let alert = mount(root.clone()).unwrap();
        alert.show_error("boom");

        let dismiss: HtmlElement = dom::query(&root, ".dismiss").unwrap();
        dismiss.click();

        assert_eq!(alert.state(), AlertState::Hidden);
        assert!(root.class_list().contains("visually-hidden"));
        assert!(dismiss.has_attribute("hidden"));
        let text: HtmlElement = dom::query(&root, ".alert-text").unwrap();
        assert_eq!(text.inner_text(), "");
    }

    #[wasm_bindgen_test]
    fn test_missing_parts_rejected() {
        let document = dom::document().unwrap();
        let root = document.create_element("div").unwrap();
        assert!(matches!(
            DomAlertSurface::find(root),
            Err(SprinklesError::MissingElement(_))
        ));
    }
}
