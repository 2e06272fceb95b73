//! Client configuration
//!
//! Every field has a default matching the stock page markup and backend,
//! so an empty object (or no config at all) is valid.

use serde::Deserialize;

use crate::error::SprinklesError;

pub const DEFAULT_WORKING_MESSAGE: &str = "Uploading file to Document AI";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Your download will begin shortly";
pub const DEFAULT_UNREACHABLE_MESSAGE: &str = "Backend not reachable.";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SprinklesConfig {
    /// Form whose submission triggers an upload; its `action` is the endpoint
    pub form_selector: String,
    /// `id` of the file input
    pub file_input_id: String,
    /// Alert container holding `.alert-title`, `.alert-text` and `.dismiss`
    pub alert_selector: String,
    /// Cookie carrying the XSRF token
    pub cookie_name: String,
    /// Header the token is forwarded in
    pub xsrf_header: String,
    /// Query parameter carrying the original filename
    pub filename_param: String,
    pub working_message: String,
    pub success_message: String,
    /// Shown for error responses whose body is not a structured error
    pub unreachable_message: String,
    /// Delay before a download's object URL is released
    pub revoke_delay_ms: u32,
}

impl Default for SprinklesConfig {
    fn default() -> Self {
        Self {
            form_selector: ".form-container form".to_string(),
            file_input_id: "pdf".to_string(),
            alert_selector: ".alert".to_string(),
            cookie_name: "_xsrf".to_string(),
            xsrf_header: "X-XSRFToken".to_string(),
            filename_param: "filename".to_string(),
            working_message: DEFAULT_WORKING_MESSAGE.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            unreachable_message: DEFAULT_UNREACHABLE_MESSAGE.to_string(),
            revoke_delay_ms: 60_000,
        }
    }
}

impl SprinklesConfig {
    /// Parse from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> Result<Self, SprinklesError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SprinklesError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SprinklesError> {
        let required = [
            ("formSelector", &self.form_selector),
            ("fileInputId", &self.file_input_id),
            ("alertSelector", &self.alert_selector),
            ("cookieName", &self.cookie_name),
            ("xsrfHeader", &self.xsrf_header),
            ("filenameParam", &self.filename_param),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(SprinklesError::Config(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}
