use serde::Serialize;

pub mod career;
pub mod contact;
pub mod counselor;
pub mod diagnostics;
pub mod quiz;
pub mod root;
pub mod saved;

/// `{"status": ...}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const fn new(status: &'static str) -> Self {
        Self { status }
    }
}
