use serde::{Deserialize, Serialize};

/// A district career counselor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counselor {
    pub name: String,
    pub phone: String,
    pub district: String,
}
