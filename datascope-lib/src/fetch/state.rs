//! Fetch state machine

use crate::model::Value;

/// Outcome of one fetch cycle.
///
/// Exactly one variant holds at any time. Transitions are
/// `Loading -> Success` or `Loading -> Failed`; a new cycle always passes
/// through `Loading` again before publishing another outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// A request is in flight (or about to be issued).
    Loading,
    /// The last cycle produced a normalized dataset.
    Success(Vec<Value>),
    /// The last cycle failed; the message is display-ready.
    Failed(String),
}

impl FetchState {
    /// Returns `true` while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` if the last cycle succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the last cycle failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the dataset if the last cycle succeeded.
    pub fn data(&self) -> Option<&[Value]> {
        match self {
            Self::Success(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the error message if the last cycle failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The externally visible fetch state triple.
///
/// `data` outlives failures: after an error it still holds the last
/// successful dataset (or `None` if nothing ever succeeded), while `error`
/// carries the failure message. This mirrors how a dashboard keeps showing
/// stale rows under an error banner rather than blanking the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchSnapshot {
    /// Last successfully published dataset.
    pub data: Option<Vec<Value>>,
    /// Whether a request is currently in flight.
    pub is_loading: bool,
    /// Error message from the last cycle, if it failed.
    pub error: Option<String>,
}
