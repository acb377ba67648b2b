use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry in the daily plan.
///
/// Ids are opaque strings assigned by the server (UUIDs in practice) and
/// stable across refreshes. The text may carry a decorative leading symbol;
/// it is displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// Task with a locally generated id, for source rows that omit one.
    pub fn with_local_id(text: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), text)
    }
}
