//! Career quiz types.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// User id recorded in quiz history when the submission carries none.
pub const GUEST_USER_ID: &str = "guest";

/// One selectable answer of a quiz step.
///
/// `key` is what submissions send back, so it must stay stable across seed
/// versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub key: String,
    pub label_en: String,
    pub label_te: String,
    pub icon: String,
}

impl QuizOption {
    pub fn new(key: &str, label_en: &str, label_te: &str, icon: &str) -> Self {
        Self {
            key: key.to_owned(),
            label_en: label_en.to_owned(),
            label_te: label_te.to_owned(),
            icon: icon.to_owned(),
        }
    }
}

/// A quiz step. Steps start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestQuestion {
    pub step: NonZeroU32,
    pub question_en: String,
    pub question_te: String,
    pub options: Vec<QuizOption>,
}

/// Answers posted by a client, one option key per step.
///
/// Neither the number of answers nor the keys themselves are validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSubmission {
    #[serde(default)]
    pub user_id: Option<String>,
    pub answers: Vec<String>,
}

/// Recommendation returned for a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub user_id: Option<String>,
    pub recommended_ids: Vec<String>,
}

/// Persisted history entry for a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestHistory {
    pub user_id: String,
    pub answers: Vec<String>,
    pub recommended_ids: Vec<String>,
}

impl TestHistory {
    pub fn new(submission: &TestSubmission, recommended_ids: Vec<String>) -> Self {
        Self {
            user_id: submission
                .user_id
                .clone()
                .unwrap_or_else(|| GUEST_USER_ID.to_owned()),
            answers: submission.answers.clone(),
            recommended_ids,
        }
    }
}
