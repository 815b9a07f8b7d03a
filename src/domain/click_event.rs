//! Click event model for asynchronous click counting.

/// A resolved redirect waiting to be counted.
///
/// Sent from the resolution path to the background worker through a bounded
/// channel so that redirects never wait on the counter write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub id: String,
}

impl ClickEvent {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
