//! Query builders: request parameters and quiz answers to [`CareerFilter`].

use careerpath_domain::career::JobType;

use crate::domain::types::{CareerFilter, TextField};

/// What a recognized quiz answer contributes to the recommendation filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerEffect {
    /// Career carries `tag` OR belongs to `field`.
    TagOrField {
        tag: &'static str,
        field: &'static str,
    },
    JobType(JobType),
}

impl AnswerEffect {
    pub fn to_filter(self) -> CareerFilter {
        match self {
            Self::TagOrField { tag, field } => CareerFilter::AnyOf(vec![
                CareerFilter::HasTag(tag.to_owned()),
                CareerFilter::FieldIs(field.to_owned()),
            ]),
            Self::JobType(job_type) => CareerFilter::JobTypeIs(job_type),
        }
    }
}

/// Answer key → effect. Keys match the option keys of the seeded quiz.
pub const ANSWER_EFFECTS: &[(&str, AnswerEffect)] = &[
    ("fix", AnswerEffect::TagOrField { tag: "hands-on", field: "Trades" }),
    ("help", AnswerEffect::TagOrField { tag: "helping", field: "Healthcare" }),
    ("teach", AnswerEffect::TagOrField { tag: "teaching", field: "Education" }),
    ("create", AnswerEffect::TagOrField { tag: "creative", field: "Design" }),
    ("logic", AnswerEffect::TagOrField { tag: "logic", field: "Engineering" }),
    ("govt", AnswerEffect::JobType(JobType::Government)),
    ("private", AnswerEffect::JobType(JobType::Private)),
    ("self", AnswerEffect::JobType(JobType::SelfEmployed)),
];

pub fn answer_effect(key: &str) -> Option<AnswerEffect> {
    ANSWER_EFFECTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, effect)| *effect)
}

/// Catalog search filter.
///
/// `q` matches either name, the field (substring) or a tag (exact); `field`
/// must match exactly; `edu` is a substring of the education text. Blank
/// parameters are ignored.
pub fn catalog_filter(q: Option<&str>, field: Option<&str>, edu: Option<&str>) -> CareerFilter {
    let present = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(str::to_owned);
    let mut clauses = Vec::new();

    if let Some(q) = present(q) {
        clauses.push(CareerFilter::AnyOf(vec![
            CareerFilter::TextContains {
                field: TextField::NameEn,
                needle: q.clone(),
            },
            CareerFilter::TextContains {
                field: TextField::NameTe,
                needle: q.clone(),
            },
            CareerFilter::TextContains {
                field: TextField::Field,
                needle: q.clone(),
            },
            CareerFilter::HasTag(q),
        ]));
    }
    if let Some(field) = present(field) {
        clauses.push(CareerFilter::FieldIs(field));
    }
    if let Some(edu) = present(edu) {
        clauses.push(CareerFilter::TextContains {
            field: TextField::Education,
            needle: edu,
        });
    }

    CareerFilter::all_of(clauses)
}

/// Recommendation filter: the conjunction of every recognized answer's
/// effect, in answer order. Unknown keys are skipped, so a submission with
/// none recognized is unrestricted.
pub fn quiz_filter(answers: &[String]) -> CareerFilter {
    CareerFilter::all_of(
        answers
            .iter()
            .filter_map(|a| answer_effect(a))
            .map(AnswerEffect::to_filter)
            .collect(),
    )
}
