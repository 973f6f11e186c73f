use serde::Deserialize;

/// Image formats the backend accepts for a search photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoType {
    Jpg,
    Jpeg,
    Png,
}

impl PhotoType {
    /// Extensions offered to the file picker, without the leading dot
    pub const EXTENSIONS: [&'static str; 3] = ["jpg", "jpeg", "png"];

    /// Case-insensitive lookup by file extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" => Some(PhotoType::Jpg),
            "jpeg" => Some(PhotoType::Jpeg),
            "png" => Some(PhotoType::Png),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            PhotoType::Jpg | PhotoType::Jpeg => "image/jpeg",
            PhotoType::Png => "image/png",
        }
    }
}

/// A photo selected by the user, ready to be sent to the backend.
///
/// Never mutated after intake; a new selection replaces it entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedPhoto {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub declared_type: PhotoType,
}

impl UploadedPhoto {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Result of one search attempt as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Backend found matches; URLs in backend order. May be empty.
    Success { matches: Vec<String> },
    /// No face could be found in the uploaded photo
    NoFaceDetected,
    /// A face was found but no indexed photo matched it
    NoMatchFound,
    /// The event has no indexed photos yet
    NoPhotosIndexed,
    /// Backend answered with a non-success HTTP status
    ServerError { http_status: u16, body: String },
    /// The request never produced an HTTP response (timeout, connection failure)
    TransportError { message: String },
}

impl SearchOutcome {
    /// Short stable name of the variant, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            SearchOutcome::Success { .. } => "success",
            SearchOutcome::NoFaceDetected => "no_face_detected",
            SearchOutcome::NoMatchFound => "no_match_found",
            SearchOutcome::NoPhotosIndexed => "no_photos_indexed",
            SearchOutcome::ServerError { .. } => "server_error",
            SearchOutcome::TransportError { .. } => "transport_error",
        }
    }
}

/// Body of a successful `POST /search` response
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum SearchResponse {
    Success {
        #[serde(default)]
        matches: Option<Vec<String>>,
    },
    NoFaceDetected,
    NoMatchFound,
    NoPhotosIndexed,
}

impl From<SearchResponse> for SearchOutcome {
    fn from(response: SearchResponse) -> Self {
        match response {
            SearchResponse::Success { matches } => SearchOutcome::Success {
                matches: matches.unwrap_or_default(),
            },
            SearchResponse::NoFaceDetected => SearchOutcome::NoFaceDetected,
            SearchResponse::NoMatchFound => SearchOutcome::NoMatchFound,
            SearchResponse::NoPhotosIndexed => SearchOutcome::NoPhotosIndexed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_type_is_case_insensitive() {
        assert_eq!(PhotoType::from_extension("JPG"), Some(PhotoType::Jpg));
        assert_eq!(PhotoType::from_extension("JpEg"), Some(PhotoType::Jpeg));
        assert_eq!(PhotoType::from_extension("png"), Some(PhotoType::Png));
        assert_eq!(PhotoType::from_extension("gif"), None);
        assert_eq!(PhotoType::from_extension(""), None);
    }

    #[test]
    fn test_photo_type_mime() {
        assert_eq!(PhotoType::Jpg.mime(), "image/jpeg");
        assert_eq!(PhotoType::Jpeg.mime(), "image/jpeg");
        assert_eq!(PhotoType::Png.mime(), "image/png");
    }

    #[test]
    fn test_outcome_kinds_are_distinct() {
        let outcomes = [
            SearchOutcome::Success { matches: vec![] },
            SearchOutcome::NoFaceDetected,
            SearchOutcome::NoMatchFound,
            SearchOutcome::NoPhotosIndexed,
            SearchOutcome::ServerError {
                http_status: 500,
                body: String::new(),
            },
            SearchOutcome::TransportError {
                message: String::new(),
            },
        ];
        let mut kinds: Vec<_> = outcomes.iter().map(|o| o.kind()).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), outcomes.len());
    }
}
