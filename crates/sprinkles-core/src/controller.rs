//! Upload lifecycle
//!
//! One submission: show Working, POST the file, classify what comes back,
//! then either hand the result to the downloader and show Success, or show
//! Error. Nothing is retried or queued.

#![allow(async_fn_in_trait)]

use std::cell::Cell;
use std::rc::Rc;

use tracing::{error, info, warn};

use crate::alert::{AlertBox, AlertSurface};
use crate::config::SprinklesConfig;
use crate::cookie::read_cookie;
use crate::error::SprinklesError;
use crate::outcome::{OutcomeKind, UploadOutcome};
use crate::request::{upload_url, PreparedUpload, UploadRequest};

/// A received HTTP response whose body has not been read yet
pub trait HttpResponse {
    type Blob;

    fn status(&self) -> u16;

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }

    async fn text(self) -> Result<String, SprinklesError>;

    async fn blob(self) -> Result<Self::Blob, SprinklesError>;
}

/// Issues the upload POST
pub trait Transport {
    type Payload;
    type Blob;
    type Response: HttpResponse<Blob = Self::Blob>;

    /// Resolves once response headers arrive. `Err` means no response at
    /// all, and carries the transport's own description.
    async fn send(
        &self,
        upload: PreparedUpload<Self::Payload>,
    ) -> Result<Self::Response, SprinklesError>;
}

/// Hands a finished file to the user
pub trait Downloader {
    type Blob;

    fn download(&self, blob: Self::Blob, filename: &str) -> Result<(), SprinklesError>;
}

pub struct UploadController<T, D, S>
where
    S: AlertSurface,
{
    action: String,
    config: SprinklesConfig,
    transport: T,
    downloader: D,
    alert: Rc<AlertBox<S>>,
    in_flight: Cell<u32>,
}

impl<T, D, S> UploadController<T, D, S>
where
    T: Transport,
    D: Downloader<Blob = T::Blob>,
    S: AlertSurface,
{
    pub fn new(
        action: impl Into<String>,
        config: SprinklesConfig,
        transport: T,
        downloader: D,
        alert: Rc<AlertBox<S>>,
    ) -> Self {
        Self {
            action: action.into(),
            config,
            transport,
            downloader,
            alert,
            in_flight: Cell::new(0),
        }
    }

    pub fn alert(&self) -> &Rc<AlertBox<S>> {
        &self.alert
    }

    /// Number of submissions still awaiting a response
    pub fn in_flight(&self) -> u32 {
        self.in_flight.get()
    }

    /// Run one upload to completion.
    ///
    /// `cookies` is the page's `document.cookie`. Overlapping calls are not
    /// serialized; whichever finishes last owns the alert.
    pub async fn submit(
        &self,
        request: UploadRequest<T::Payload>,
        cookies: &str,
    ) -> OutcomeKind {
        self.alert.show_working(&self.config.working_message);

        let pending = self.in_flight.get() + 1;
        self.in_flight.set(pending);
        if pending > 1 {
            warn!(pending, "upload started while another is still in flight");
        }

        let outcome = self.perform(request, cookies).await;
        self.in_flight.set(self.in_flight.get().saturating_sub(1));

        self.finish(outcome)
    }

    /// Report a submission that could not start, e.g. no file chosen
    pub fn reject(&self, err: &SprinklesError) {
        warn!(error = %err, "upload not started");
        self.alert.show_error(&err.to_string());
    }

    async fn perform(
        &self,
        request: UploadRequest<T::Payload>,
        cookies: &str,
    ) -> UploadOutcome<T::Blob> {
        let UploadRequest { filename, payload } = request;
        let url = upload_url(&self.action, &self.config.filename_param, &filename);

        let xsrf = match read_cookie(cookies, &self.config.cookie_name) {
            Some(token) => Some((self.config.xsrf_header.clone(), token)),
            None => {
                warn!(
                    cookie = %self.config.cookie_name,
                    "XSRF cookie not found, sending upload without token"
                );
                None
            }
        };

        info!(%filename, %url, "uploading file");
        let upload = PreparedUpload { url, xsrf, payload };

        let response = match self.transport.send(upload).await {
            Ok(response) => response,
            Err(e) => {
                return UploadOutcome::NetworkError {
                    message: e.to_string(),
                }
            }
        };

        if !response.is_success() {
            let status = response.status();
            return match response.text().await {
                Ok(text) => UploadOutcome::from_error_body(status, text),
                Err(e) => UploadOutcome::NetworkError {
                    message: e.to_string(),
                },
            };
        }

        match response.blob().await {
            Ok(blob) => UploadOutcome::DownloadReady { blob, filename },
            Err(e) => UploadOutcome::NetworkError {
                message: e.to_string(),
            },
        }
    }

    fn finish(&self, outcome: UploadOutcome<T::Blob>) -> OutcomeKind {
        let kind = outcome.kind();
        let traceback = outcome.traceback();

        match outcome {
            UploadOutcome::DownloadReady { blob, filename } => {
                match self.downloader.download(blob, &filename) {
                    Ok(()) => {
                        info!(%filename, "download triggered");
                        self.alert.show_success(&self.config.success_message);
                    }
                    Err(e) => {
                        error!(%filename, error = %e, "could not start download");
                        self.alert.show_error(&e.to_string());
                        return OutcomeKind::DownloadFailed;
                    }
                }
            }
            UploadOutcome::StructuredError {
                status,
                message,
                detail,
            } => {
                error!(status, %message, %detail, ?traceback, "backend rejected upload");
                self.alert.show_error(&message);
            }
            UploadOutcome::UnstructuredError { status, raw } => {
                error!(status, body = %raw, "backend returned an unreadable error");
                self.alert.show_error(&self.config.unreachable_message);
            }
            UploadOutcome::NetworkError { message } => {
                error!(%message, "upload request failed");
                self.alert.show_error(&message);
            }
        }

        kind
    }
}
