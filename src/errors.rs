use crate::cake::CakeError;
use crate::fireworks::FireworkError;
use crate::models::UnknownOption;
use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }
}

impl From<UnknownOption> for AppError {
    fn from(err: UnknownOption) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<FireworkError> for AppError {
    fn from(err: FireworkError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<CakeError> for AppError {
    fn from(err: CakeError) -> Self {
        Self::conflict(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
