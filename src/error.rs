use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hickup_intake::IntakeError;
use hickup_notification::SendError;
use serde_json::json;
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Name, email, and message are required";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send email";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    #[error("Email provider error: {0}")]
    SendFailed(#[from] SendError),

    #[error("Internal server error: {0}")]
    Server(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Server(err.to_string())
    }
}

impl From<BytesRejection> for AppError {
    fn from(err: BytesRejection) -> Self {
        AppError::Server(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::Intake(IntakeError::MissingRequired) => {
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
            }
            AppError::Intake(IntakeError::Render(e)) => {
                tracing::error!("Server error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
            }
            AppError::SendFailed(e) => {
                tracing::error!("Email provider error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED_MESSAGE)
            }
            AppError::Server(e) => {
                tracing::error!("Server error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
