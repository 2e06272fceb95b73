//! Upload outcome classification
//!
//! A finished upload is one of four things: a file to download, a
//! structured backend error, an error response we cannot interpret, or a
//! request that never got a response.

use serde::Deserialize;

/// Error body the backend sends on failure: `{"message": "...", "traceback": [...]}`.
/// The traceback is only present when the backend runs in debug mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: serde_json::Value,
    #[serde(default)]
    pub traceback: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome<B> {
    DownloadReady {
        blob: B,
        filename: String,
    },
    StructuredError {
        status: u16,
        message: String,
        /// Entire parsed body, kept for diagnostics
        detail: serde_json::Value,
    },
    UnstructuredError {
        status: u16,
        raw: String,
    },
    NetworkError {
        message: String,
    },
}

/// Discriminant of an [`UploadOutcome`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    DownloadReady,
    StructuredError,
    UnstructuredError,
    NetworkError,
    /// The file arrived but the browser download could not be started
    DownloadFailed,
}

impl OutcomeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeKind::DownloadReady => "downloadReady",
            OutcomeKind::StructuredError => "structuredError",
            OutcomeKind::UnstructuredError => "unstructuredError",
            OutcomeKind::NetworkError => "networkError",
            OutcomeKind::DownloadFailed => "downloadFailed",
        }
    }
}

impl<B> UploadOutcome<B> {
    /// Classify the text body of a non-success response.
    ///
    /// JSON with a scalar `message` is structured: strings are taken
    /// verbatim, numbers and booleans in their JSON spelling. Invalid JSON,
    /// a missing or null `message`, or an object/array `message` is
    /// unstructured.
    pub fn from_error_body(status: u16, text: String) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(&text).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(scalar_message);

        match (parsed, message) {
            (Some(detail), Some(message)) => UploadOutcome::StructuredError {
                status,
                message,
                detail,
            },
            _ => UploadOutcome::UnstructuredError { status, raw: text },
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            UploadOutcome::DownloadReady { .. } => OutcomeKind::DownloadReady,
            UploadOutcome::StructuredError { .. } => OutcomeKind::StructuredError,
            UploadOutcome::UnstructuredError { .. } => OutcomeKind::UnstructuredError,
            UploadOutcome::NetworkError { .. } => OutcomeKind::NetworkError,
        }
    }

    /// Traceback lines from a structured error, if the backend sent them
    pub fn traceback(&self) -> Option<Vec<String>> {
        match self {
            UploadOutcome::StructuredError { detail, .. } => {
                serde_json::from_value::<ErrorBody>(detail.clone())
                    .ok()
                    .and_then(|body| body.traceback)
            }
            _ => None,
        }
    }
}

fn scalar_message(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
