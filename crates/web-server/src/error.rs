use actions::ActionError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Action failed: {0}")]
    Action(#[from] ActionError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            // Form failures carry their own body so the form can show the messages.
            AppError::Action(ActionError::Validation(state)) => {
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(state)).into_response();
            }
            AppError::Action(ActionError::Database { state, .. }) => {
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(state)).into_response();
            }
            AppError::Serialization(err) => {
                tracing::error!(error = ?err, "Serialization error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to build the response".to_string(),
                )
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
