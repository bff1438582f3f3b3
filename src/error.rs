use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised by the result generator and the pagination planner.
///
/// These are contract violations on the caller's side. The HTTP layer clamps
/// user-supplied page numbers before calling in, so in practice they only
/// surface through the JSON API where `page_size` is caller controlled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoseError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RoseError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        RoseError::InvalidArgument(msg.into())
    }
}

impl IntoResponse for RoseError {
    fn into_response(self) -> Response {
        let status = match self {
            RoseError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        };
        tracing::debug!("rejecting request: {}", self);
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RoseError>;
