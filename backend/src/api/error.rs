// FICHIER : backend/src/api/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::utils::AppError;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Corps en texte brut : le message est directement affichable côté client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
