use findme_client::SearchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Info,
    Error,
}

/// What the results area shows for one outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub tone: Tone,
    /// CSS class, unique per outcome variant
    pub class: &'static str,
    pub headline: String,
    pub detail: Option<String>,
    /// Photo links in backend order
    pub links: Vec<String>,
}

impl Presentation {
    fn message(tone: Tone, class: &'static str, headline: impl Into<String>) -> Self {
        Self {
            tone,
            class,
            headline: headline.into(),
            detail: None,
            links: Vec::new(),
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Map the active outcome to page content. `None` renders nothing.
pub fn present(outcome: Option<&SearchOutcome>) -> Option<Presentation> {
    let presentation = match outcome? {
        SearchOutcome::Success { matches } => Presentation {
            tone: Tone::Success,
            class: "outcome-success",
            headline: format!("Found {} matching photos!", matches.len()),
            detail: Some("Here are the links to your photos:".to_string()),
            links: matches.clone(),
        },
        SearchOutcome::NoFaceDetected => Presentation::message(
            Tone::Warning,
            "outcome-no-face",
            "Could not detect a face in your photo. Please try a different one with a clear view of your face.",
        ),
        SearchOutcome::NoMatchFound => Presentation::message(
            Tone::Info,
            "outcome-no-match",
            "No matching photos found in our database. Please try another photo or check back later.",
        ),
        SearchOutcome::NoPhotosIndexed => Presentation::message(
            Tone::Info,
            "outcome-not-indexed",
            "The event photos have not been indexed yet. Please check back later.",
        ),
        SearchOutcome::ServerError { http_status, body } => Presentation::message(
            Tone::Error,
            "outcome-server-error",
            format!("Error from the backend: {} - {}", http_status, body),
        )
        .with_detail("Please contact the administrator or try again later."),
        SearchOutcome::TransportError { message } => Presentation::message(
            Tone::Error,
            "outcome-transport-error",
            format!("Failed to connect to the backend: {}", message),
        )
        .with_detail("Please check your connection and the backend URL, then try again."),
    };
    Some(presentation)
}
