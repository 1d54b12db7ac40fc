// FICHIER : backend/src/api/extract.rs

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;

use crate::utils::json::{Map, Value};
use crate::utils::AppError;

/// Champs d'un corps JSON objet.
///
/// Sans `Content-Type: application/json`, ou avec un corps vide, le corps est
/// ignoré et vaut `{}`. Avec ce type, un JSON invalide ou non objet est refusé
/// (400) avant tout accès au stockage.
#[derive(Debug, Default)]
pub struct JsonFields(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(req.headers());
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if !is_json || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonFields::default());
        }

        match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Object(fields)) => Ok(JsonFields(fields)),
            Ok(_) => Err(AppError::BadRequest(
                "le corps doit être un objet JSON".to_string(),
            )),
            Err(e) => Err(AppError::BadRequest(format!("JSON invalide : {e}"))),
        }
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
