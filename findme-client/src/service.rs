use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::interpret::interpret_bytes;
use crate::models::{SearchOutcome, UploadedPhoto};

/// Upper bound for one search round trip
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Multipart field the backend reads the photo from
pub const PHOTO_FIELD: &str = "runner_photo";

/// Error type for client construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    Build(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Build(msg) => write!(f, "HTTP client build failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// Talks to the photo search backend
#[derive(Debug, Clone)]
pub struct SearchClient {
    search_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl SearchClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, SEARCH_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("findme-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            search_url: format!("{}/search", base_url.trim_end_matches('/')),
            timeout,
            http,
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Send one photo to `POST {base}/search`.
    ///
    /// Exactly one request is made and nothing is retried. Transport and
    /// server failures come back as outcomes, as does a 200 body that cannot
    /// be parsed. `None` means the backend answered 200 with a missing or
    /// unknown `status`.
    pub async fn search(&self, photo: &UploadedPhoto) -> Option<SearchOutcome> {
        log::info!(
            "Searching {} with {} ({} bytes)",
            self.search_url,
            photo.filename,
            photo.size()
        );

        let part = match Part::bytes(photo.bytes.clone())
            .file_name(photo.filename.clone())
            .mime_str(photo.declared_type.mime())
        {
            Ok(part) => part,
            Err(e) => {
                return Some(SearchOutcome::TransportError {
                    message: format!("Failed to build request: {}", e),
                })
            }
        };
        let form = Form::new().part(PHOTO_FIELD, part);

        let response = match self.http.post(&self.search_url).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => return Some(self.transport_error(&e)),
        };

        let status = response.status();
        log::debug!("Search response status: {}", status);

        if status != StatusCode::OK {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => return Some(self.transport_error(&e)),
            };
            log::warn!("Backend returned HTTP {}", status.as_u16());
            return Some(SearchOutcome::ServerError {
                http_status: status.as_u16(),
                body,
            });
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return Some(self.transport_error(&e)),
        };

        let outcome = interpret_bytes(&body);
        if let Some(outcome) = &outcome {
            log::info!("Search finished: {}", outcome.kind());
        }
        outcome
    }

    fn transport_error(&self, e: &reqwest::Error) -> SearchOutcome {
        let message = if e.is_timeout() {
            format!("Request timed out after {:?}", self.timeout)
        } else if e.is_connect() {
            format!("Could not connect to {}: {}", self.search_url, e)
        } else {
            format!("Request failed: {}", e)
        };
        log::warn!("Search transport error: {}", message);
        SearchOutcome::TransportError { message }
    }
}
