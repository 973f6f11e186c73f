//! Per-session search state.
//!
//! Holds the selected photo and the last outcome. At most one search is in
//! flight at a time, and a result that arrives after the user picked another
//! photo is dropped.

use findme_client::{SearchOutcome, UploadedPhoto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A search is already running
    SearchInFlight,
    /// No photo has been accepted yet
    NoPhoto,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::SearchInFlight => write!(f, "A search is already running"),
            SessionError::NoPhoto => write!(f, "No photo selected"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Handed out by [`Session::begin_search`], returned on completion
#[derive(Debug, Clone)]
pub struct SearchTicket {
    pub photo: UploadedPhoto,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    photo: Option<UploadedPhoto>,
    outcome: Option<SearchOutcome>,
    in_flight: bool,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn photo(&self) -> Option<&UploadedPhoto> {
        self.photo.as_ref()
    }

    /// Outcome of the last completed search for the current photo
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight
    }

    /// Replace the current photo and forget the previous result
    pub fn select_photo(&mut self, photo: UploadedPhoto) {
        self.photo = Some(photo);
        self.outcome = None;
        self.generation += 1;
    }

    /// Drop the current photo after a rejected selection
    pub fn clear_photo(&mut self) {
        self.photo = None;
        self.outcome = None;
        self.generation += 1;
    }

    pub fn can_submit(&self, configured: bool) -> bool {
        configured && self.photo.is_some() && !self.in_flight
    }

    pub fn begin_search(&mut self) -> Result<SearchTicket, SessionError> {
        if self.in_flight {
            return Err(SessionError::SearchInFlight);
        }
        let photo = self.photo.clone().ok_or(SessionError::NoPhoto)?;
        self.in_flight = true;
        self.outcome = None;
        Ok(SearchTicket {
            photo,
            generation: self.generation,
        })
    }

    /// Record the result of a search started with `ticket`.
    ///
    /// `outcome` is `None` for an unrecognized backend response, which
    /// leaves nothing to display.
    pub fn complete(&mut self, ticket: SearchTicket, outcome: Option<SearchOutcome>) {
        self.in_flight = false;
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding result for {}: a different photo was selected",
                ticket.photo.filename
            );
            return;
        }
        self.outcome = outcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use findme_client::PhotoIntake;

    fn photo(name: &str) -> UploadedPhoto {
        PhotoIntake::accept(name, vec![1, 2, 3]).unwrap()
    }

    #[test]
    fn test_new_session_has_nothing() {
        let session = Session::new();
        assert!(session.photo().is_none());
        assert!(session.outcome().is_none());
        assert!(!session.can_submit(true));
    }

    #[test]
    fn test_search_round_trip() {
        let mut session = Session::new();
        session.select_photo(photo("me.jpg"));
        assert!(session.can_submit(true));

        let ticket = session.begin_search().unwrap();
        assert_eq!(ticket.photo.filename, "me.jpg");
        assert!(session.is_searching());
        assert!(!session.can_submit(true));

        session.complete(ticket, Some(SearchOutcome::NoMatchFound));
        assert!(!session.is_searching());
        assert_eq!(session.outcome(), Some(&SearchOutcome::NoMatchFound));
    }

    #[test]
    fn test_single_flight() {
        let mut session = Session::new();
        session.select_photo(photo("me.jpg"));
        let _ticket = session.begin_search().unwrap();
        assert_eq!(
            session.begin_search().unwrap_err(),
            SessionError::SearchInFlight
        );
    }

    #[test]
    fn test_search_needs_photo() {
        let mut session = Session::new();
        assert_eq!(session.begin_search().unwrap_err(), SessionError::NoPhoto);
    }

    #[test]
    fn test_new_selection_resets_outcome() {
        let mut session = Session::new();
        session.select_photo(photo("first.jpg"));
        let ticket = session.begin_search().unwrap();
        session.complete(
            ticket,
            Some(SearchOutcome::Success {
                matches: vec!["https://p/1.jpg".to_string()],
            }),
        );
        assert!(session.outcome().is_some());

        session.select_photo(photo("second.png"));
        assert!(session.outcome().is_none());
        assert_eq!(session.photo().unwrap().filename, "second.png");
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut session = Session::new();
        session.select_photo(photo("first.jpg"));
        let ticket = session.begin_search().unwrap();

        session.select_photo(photo("second.jpg"));
        session.complete(ticket, Some(SearchOutcome::NoFaceDetected));

        assert!(session.outcome().is_none());
        assert!(!session.is_searching());
        assert!(session.can_submit(true));
    }

    #[test]
    fn test_unrecognized_response_shows_nothing() {
        let mut session = Session::new();
        session.select_photo(photo("me.jpg"));
        let ticket = session.begin_search().unwrap();
        session.complete(ticket, None);
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_rejected_selection_clears_state() {
        let mut session = Session::new();
        session.select_photo(photo("me.jpg"));
        let ticket = session.begin_search().unwrap();
        session.complete(ticket, Some(SearchOutcome::NoMatchFound));

        session.clear_photo();
        assert!(session.photo().is_none());
        assert!(session.outcome().is_none());
        assert!(!session.can_submit(true));
    }

    #[test]
    fn test_unconfigured_session_cannot_submit() {
        let mut session = Session::new();
        session.select_photo(photo("me.jpg"));
        assert!(!session.can_submit(false));
    }
}
