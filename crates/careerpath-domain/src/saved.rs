//! Saved (favorited) careers.

use serde::{Deserialize, Serialize};

/// A career bookmarked by a user.
///
/// `user_id` is a logical id such as `guest-<device>`; `career_id` is the
/// public id of a career. At most one record per pair is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCareer {
    pub user_id: String,
    pub career_id: String,
}

/// Outcome of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created { id: String },
    AlreadyExists,
}
