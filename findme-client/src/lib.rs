//! # FindMe Client
//!
//! Client side of the FindMe event photo search.
//!
//! This crate provides:
//! - Intake of a single user photo (jpg, jpeg, png)
//! - The `POST /search` request against the matching backend
//! - Interpretation of the backend's JSON answer into a closed set of outcomes
//!
//! ## Separation of Concerns
//!
//! This crate has no UI. It does **not**:
//! - Read configuration (the application passes the backend URL in)
//! - Render outcomes (handled by the application)
//! - Retry or cache searches
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use findme_client::{PhotoIntake, SearchClient};
//!
//! let photo = PhotoIntake::accept("selfie.jpg", bytes)?;
//! let client = SearchClient::new("https://findme.example.org")?;
//! match client.search(&photo).await {
//!     Some(outcome) => show(outcome),
//!     None => log::warn!("backend sent something unexpected"),
//! }
//! ```

pub mod intake;
pub mod interpret;
pub mod models;
pub mod service;

pub use intake::{IntakeError, PhotoIntake};
pub use interpret::{interpret, interpret_bytes, MalformedResponse};
pub use models::{PhotoType, SearchOutcome, UploadedPhoto};
pub use service::{ClientError, SearchClient, PHOTO_FIELD, SEARCH_TIMEOUT};
