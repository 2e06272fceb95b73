//! Upload-and-download flow for PDF Sprinkles
//!
//! This crate holds everything about the client that does not touch the
//! browser: the alert state machine, response classification, XSRF cookie
//! lookup, request URL construction and the controller tying them
//! together. The wasm app supplies the DOM, `fetch` and download glue
//! through the [`AlertSurface`], [`Transport`] and [`Downloader`] traits.

pub mod alert;
pub mod config;
pub mod controller;
pub mod cookie;
pub mod error;
pub mod outcome;
pub mod request;

pub use alert::{AlertBox, AlertFrame, AlertState, AlertStyle, AlertSurface};
pub use config::SprinklesConfig;
pub use controller::{Downloader, HttpResponse, Transport, UploadController};
pub use cookie::read_cookie;
pub use error::SprinklesError;
pub use outcome::{ErrorBody, OutcomeKind, UploadOutcome};
pub use request::{upload_url, PreparedUpload, UploadRequest};
