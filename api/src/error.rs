use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use food_store::{InvalidFoodItemId, StoreError};
use thiserror::Error;

/// Failures of the food endpoints. Every variant renders as a plain text body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid Food Id")]
    InvalidId(#[from] InvalidFoodItemId),

    #[error("Food item not found")]
    NotFound,

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("Unreadable request body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error("Internal server error")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            AppError::Store(e) => tracing::error!(error = ?e, "Food store operation failed"),
            AppError::InvalidId(e) => tracing::info!(%e, "Rejected food item id"),
            _ => {}
        }

        (self.error_code(), self.to_string()).into_response()
    }
}

impl AppError {
    fn error_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::UnreadableBody(rejection) => rejection.status(),
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
