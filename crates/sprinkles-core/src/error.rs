use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SprinklesError {
    /// The request never produced an HTTP response. The payload is the
    /// transport's own description and is shown to the user verbatim.
    #[error("{0}")]
    Transport(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Failed to start download: {0}")]
    Download(String),

    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No file selected.")]
    NoFile,
}
