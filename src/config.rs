use findme_client::SearchClient;
use reqwest::Url;

use crate::error::AppError;

/// Environment variable holding the search backend's base URL
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Configuration as resolved at startup, shared with the UI via context
pub type StartupConfig = Result<AppConfig, AppError>;

/// Settings resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let raw = lookup(BACKEND_URL_VAR).unwrap_or_default();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(AppError::Configuration(format!(
                "{} is not set",
                BACKEND_URL_VAR
            )));
        }

        let backend_url = Url::parse(trimmed).map_err(|e| {
            AppError::Configuration(format!("{} is not a valid URL: {}", BACKEND_URL_VAR, e))
        })?;

        if !matches!(backend_url.scheme(), "http" | "https") || !backend_url.has_host() {
            return Err(AppError::Configuration(format!(
                "{} must be an http(s) URL, got {}",
                BACKEND_URL_VAR, trimmed
            )));
        }

        Ok(Self { backend_url })
    }

    /// Base URL without trailing slash, ready for `{base}/search`
    pub fn base_url(&self) -> String {
        self.backend_url.as_str().trim_end_matches('/').to_string()
    }
}

/// The only way the UI obtains a [`SearchClient`]; a failed config never yields one
pub fn search_client(config: StartupConfig) -> Result<SearchClient, AppError> {
    let config = config?;
    Ok(SearchClient::new(&config.base_url())?)
}
