use std::fmt;

use findme_client::{ClientError, IntakeError};

/// Central error types for the FindMe app
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Backend URL missing or unusable; disables searching for the session
    Configuration(String),
    /// Rejected file selection
    Validation(String),
    /// General error
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from library error types
impl From<IntakeError> for AppError {
    fn from(e: IntakeError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<ClientError> for AppError {
    fn from(e: ClientError) -> Self {
        AppError::Configuration(e.to_string())
    }
}

/// User-facing text for the page
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Configuration(msg) => format!(
                "Backend URL is not configured correctly ({}). Please set the 'BACKEND_URL' environment variable.",
                msg
            ),
            AppError::Validation(msg) => format!("{}. Please choose a JPG or PNG photo.", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }
}
