//! Alert box state machine
//!
//! The alert shows exactly one of Working, Success or Error, or nothing at
//! all. State lives here; drawing it is delegated to an [`AlertSurface`] so
//! the same logic drives the DOM in the browser and a recorder in tests.

use std::cell::RefCell;

use serde::Serialize;

/// Visible style of the alert. The set is closed; each variant maps to
/// one fixed CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertStyle {
    Working,
    Success,
    Error,
}

impl AlertStyle {
    /// Every style class a surface may have applied.
    pub const ALL: [AlertStyle; 3] = [AlertStyle::Working, AlertStyle::Success, AlertStyle::Error];

    pub fn class_name(self) -> &'static str {
        match self {
            AlertStyle::Working => "alert-working",
            AlertStyle::Success => "alert-success",
            AlertStyle::Error => "alert-error",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AlertStyle::Working => "Working",
            AlertStyle::Success => "Success",
            AlertStyle::Error => "An error occurred",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    #[default]
    Hidden,
    Working,
    Success,
    Error,
}

impl AlertState {
    /// Style for a visible state, `None` when hidden
    pub fn style(self) -> Option<AlertStyle> {
        match self {
            AlertState::Hidden => None,
            AlertState::Working => Some(AlertStyle::Working),
            AlertState::Success => Some(AlertStyle::Success),
            AlertState::Error => Some(AlertStyle::Error),
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, AlertState::Success | AlertState::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertState::Hidden => "hidden",
            AlertState::Working => "working",
            AlertState::Success => "success",
            AlertState::Error => "error",
        }
    }
}

/// Snapshot of everything a surface needs to draw the alert. Serializes
/// as `{"state": "error", "title": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AlertFrame {
    pub state: AlertState,
    pub title: String,
    pub message: String,
}

impl AlertFrame {
    fn shown(style: AlertStyle, message: &str) -> Self {
        let state = match style {
            AlertStyle::Working => AlertState::Working,
            AlertStyle::Success => AlertState::Success,
            AlertStyle::Error => AlertState::Error,
        };
        Self {
            state,
            title: style.title().to_string(),
            message: message.to_string(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state != AlertState::Hidden
    }
}

/// Rendering target for an [`AlertBox`].
///
/// Implementations must strip every class in [`AlertStyle::ALL`] before
/// applying the frame's style, so no earlier state leaks into the view.
/// A hidden frame hides the container and disables the dismiss control.
pub trait AlertSurface {
    fn render(&self, frame: &AlertFrame);
}

/// Alert widget handle.
///
/// Methods take `&self` so the dismiss handler and the upload controller
/// can share one instance behind an `Rc`.
pub struct AlertBox<S: AlertSurface> {
    surface: S,
    frame: RefCell<AlertFrame>,
}

impl<S: AlertSurface> AlertBox<S> {
    /// Wrap a surface. The surface is not touched until the first update.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            frame: RefCell::new(AlertFrame::default()),
        }
    }

    pub fn show_working(&self, message: &str) {
        self.show(AlertStyle::Working, message);
    }

    pub fn show_success(&self, message: &str) {
        self.show(AlertStyle::Success, message);
    }

    pub fn show_error(&self, message: &str) {
        self.show(AlertStyle::Error, message);
    }

    pub fn dismiss(&self) {
        self.update(AlertFrame::default());
    }

    pub fn state(&self) -> AlertState {
        self.frame.borrow().state
    }

    pub fn title(&self) -> String {
        self.frame.borrow().title.clone()
    }

    pub fn message(&self) -> String {
        self.frame.borrow().message.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.frame.borrow().is_visible()
    }

    /// Copy of the current frame
    pub fn frame(&self) -> AlertFrame {
        self.frame.borrow().clone()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn show(&self, style: AlertStyle, message: &str) {
        self.update(AlertFrame::shown(style, message));
    }

    fn update(&self, frame: AlertFrame) {
        // Release the borrow before rendering; surfaces may read state back.
        {
            *self.frame.borrow_mut() = frame.clone();
        }
        self.surface.render(&frame);
    }
}
