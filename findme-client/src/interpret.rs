use serde::Deserialize;
use serde_json::Value;

use crate::models::{SearchOutcome, SearchResponse};

/// Status values this client knows how to display
const KNOWN_STATUSES: [&str; 4] = [
    "success",
    "no_face_detected",
    "no_match_found",
    "no_photos_indexed",
];

/// A success-status body that could not be read as a search response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedResponse(pub String);

impl std::fmt::Display for MalformedResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Malformed search response: {}", self.0)
    }
}

impl std::error::Error for MalformedResponse {}

/// Map a success-status response body to an outcome.
///
/// `Ok(None)` when the body is an object whose `status` is missing or not one
/// of the known values. Fields other than `status` and `matches` are ignored.
/// Anything else that does not fit the schema is a [`MalformedResponse`].
pub fn interpret(body: &Value) -> Result<Option<SearchOutcome>, MalformedResponse> {
    let Some(object) = body.as_object() else {
        return Err(MalformedResponse("body is not a JSON object".to_string()));
    };

    let status = object.get("status").and_then(Value::as_str);
    if !status.is_some_and(|s| KNOWN_STATUSES.contains(&s)) {
        log::warn!(
            "Unrecognized search response status: {}",
            object.get("status").unwrap_or(&Value::Null)
        );
        return Ok(None);
    }

    SearchResponse::deserialize(body)
        .map(|response| Some(response.into()))
        .map_err(|e| MalformedResponse(e.to_string()))
}

/// Interpret the raw body of an HTTP 200 response.
///
/// A body that is not JSON, or not a valid search response, is reported as a
/// `ServerError` carrying status 200 and the body text, so it stays visible.
pub fn interpret_bytes(body: &[u8]) -> Option<SearchOutcome> {
    let parsed = serde_json::from_slice::<Value>(body)
        .map_err(|e| MalformedResponse(format!("not JSON: {}", e)))
        .and_then(|value| interpret(&value));

    match parsed {
        Ok(outcome) => outcome,
        Err(e) => {
            log::warn!("{}", e);
            Some(SearchOutcome::ServerError {
                http_status: 200,
                body: String::from_utf8_lossy(body).into_owned(),
            })
        }
    }
}
