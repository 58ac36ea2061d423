//! Career catalog types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Employment sector of a career.
///
/// Wire format: `"Government"`, `"Private"`, `"Self-employed"`, `"Mixed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobType {
    Government,
    Private,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
    #[default]
    Mixed,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::Government,
        JobType::Private,
        JobType::SelfEmployed,
        JobType::Mixed,
    ];

    /// Stored/wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Government => "Government",
            Self::Private => "Private",
            Self::SelfEmployed => "Self-employed",
            Self::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job type: {0}")]
pub struct UnknownJobType(pub String);

impl FromStr for JobType {
    type Err = UnknownJobType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownJobType(s.to_owned()))
    }
}

/// A catalog entry. Bilingual fields carry an `_en` / `_te` suffix.
///
/// Salaries are monthly INR. `salary_min <= salary_max` is expected but not
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    pub icon: String,
    pub name_en: String,
    pub name_te: String,
    pub short_desc_en: String,
    pub short_desc_te: String,
    pub salary_min: u32,
    pub salary_max: u32,
    pub education: String,
    #[serde(default)]
    pub job_type: JobType,
    pub field: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Keywords used by search and quiz matching.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub growth_path_en: Vec<String>,
    #[serde(default)]
    pub growth_path_te: Vec<String>,
}

impl Career {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
