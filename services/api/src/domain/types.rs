use careerpath_domain::career::{Career, JobType};

/// Maximum number of careers returned by a catalog search.
pub const CATALOG_LIMIT: i64 = 60;
/// Maximum number of careers recommended for a quiz submission.
pub const QUIZ_LIMIT: i64 = 6;
/// Maximum number of counselors listed.
pub const COUNSELOR_LIMIT: i64 = 100;

/// Free-text career fields that support substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    NameEn,
    NameTe,
    Field,
    Education,
}

impl TextField {
    /// Key of the field in stored career documents.
    pub fn key(self) -> &'static str {
        match self {
            Self::NameEn => "name_en",
            Self::NameTe => "name_te",
            Self::Field => "field",
            Self::Education => "education",
        }
    }

    pub fn value(self, career: &Career) -> &str {
        match self {
            Self::NameEn => &career.name_en,
            Self::NameTe => &career.name_te,
            Self::Field => &career.field,
            Self::Education => &career.education,
        }
    }
}

/// Predicate over career records.
///
/// Built by the query builders in [`crate::domain::query`] and rendered into
/// a store query by the infra layer. [`CareerFilter::matches`] evaluates the
/// same predicate in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareerFilter {
    /// Unrestricted.
    All,
    /// Case-insensitive substring match on a text field.
    TextContains { field: TextField, needle: String },
    /// Exact membership in the tag list.
    HasTag(String),
    /// Exact match on `field`.
    FieldIs(String),
    JobTypeIs(JobType),
    AnyOf(Vec<CareerFilter>),
    AllOf(Vec<CareerFilter>),
}

impl CareerFilter {
    /// Conjunction of `clauses`; no clauses yields [`CareerFilter::All`] and a
    /// single clause is returned as is.
    pub fn all_of(mut clauses: Vec<CareerFilter>) -> Self {
        match clauses.len() {
            0 => Self::All,
            1 => clauses.remove(0),
            _ => Self::AllOf(clauses),
        }
    }

    pub fn matches(&self, career: &Career) -> bool {
        match self {
            Self::All => true,
            Self::TextContains { field, needle } => field
                .value(career)
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            Self::HasTag(tag) => career.has_tag(tag),
            Self::FieldIs(field) => &career.field == field,
            Self::JobTypeIs(job_type) => career.job_type == *job_type,
            Self::AnyOf(clauses) => clauses.iter().any(|c| c.matches(career)),
            Self::AllOf(clauses) => clauses.iter().all(|c| c.matches(career)),
        }
    }
}
