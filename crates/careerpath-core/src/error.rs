use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body returned for every error response.
///
/// Wire format: `{"kind": "SCREAMING_SNAKE", "message": "lower case text"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

/// Build an error response. Server errors are logged with their cause;
/// tower-http TraceLayer already records method/uri/status for all requests,
/// so 4xx are not logged here.
pub fn error_response(
    status: StatusCode,
    kind: &'static str,
    message: String,
    cause: Option<&dyn std::fmt::Display>,
) -> Response {
    if status.is_server_error() {
        match cause {
            Some(cause) => tracing::error!(error = %cause, kind, "internal error"),
            None => tracing::error!(kind, "{message}"),
        }
    }
    (status, axum::Json(ErrorBody { kind, message })).into_response()
}
