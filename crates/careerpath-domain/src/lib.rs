//! Record types shared by the CareerPath service and its tests.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; store documents are converted
//! into these types at the `infra/` boundary.

pub mod career;
pub mod contact;
pub mod counselor;
pub mod id;
pub mod quiz;
pub mod saved;
