use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

mod schema;

pub use schema::ErrorDetails;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// A common error type that can be returned from any handler.
///
/// Validation errors reach the client with their field level details, anything
/// else is logged and reported as an opaque `500`.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid input")]
    Validation(Vec<ErrorDetails>),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body parsing failures (malformed JSON, wrong field types, missing content
/// type) are reported like any other invalid input.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(vec![ErrorDetails::new("body", rejection.body_text())])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Validation(errors) => {
                tracing::warn!(?errors, "rejected invalid input");
                (
                    status,
                    Json(schema::Error {
                        success: false,
                        message: "Invalid input".to_owned(),
                        errors: Some(errors),
                    }),
                )
                    .into_response()
            }
            Self::Unexpected(e) => {
                tracing::error!("{:?}", e);
                (
                    status,
                    Json(schema::Error {
                        success: false,
                        message: "Internal Server Error".to_owned(),
                        errors: None,
                    }),
                )
                    .into_response()
            }
        }
    }
}
