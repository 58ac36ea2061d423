//! Test utilities for CareerPath services.
//!
//! Provides a career dataset builder and a golden-file loader.
//! Import from tests only, never from production code.

pub mod careers;
pub mod fixture;
