//! JSON body extractors.
//!
//! Bodies are parsed as JSON and, for entity payloads, decoded and validated
//! against the entity schema before the handler runs.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use studyrec_persistence::RawDocument;
use studyrec_persistence::schema::{Validate, decode};

use crate::error::RestError;

/// Axum extractor for a validated entity payload.
///
/// # Example
///
/// ```rust,ignore
/// use studyrec_rest::extractors::ValidatedJson;
/// use studyrec_persistence::schema::Roadmap;
///
/// async fn create_handler(ValidatedJson(roadmap): ValidatedJson<Roadmap>) {
///     println!("Roadmap for {}", roadmap.user_id);
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = read_json(req, state).await?;
        Ok(ValidatedJson(decode(value)?))
    }
}

/// Axum extractor for a body that must be a JSON object.
#[derive(Debug)]
pub struct JsonObject(pub RawDocument);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match read_json(req, state).await? {
            Value::Object(map) => Ok(JsonObject(map)),
            _ => Err(RestError::BadRequest {
                message: "Request body must be a JSON object".to_string(),
            }),
        }
    }
}

async fn read_json<S>(req: Request, state: &S) -> Result<Value, RestError>
where
    S: Send + Sync,
{
    // A missing Content-Type is read as JSON
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    if !content_type.contains("json") {
        return Err(RestError::BadRequest {
            message: format!("Content-Type must be application/json, got '{}'", content_type),
        });
    }

    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|e| RestError::BadRequest {
            message: e.body_text(),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| RestError::BadRequest {
        message: format!("Invalid JSON: {}", e),
    })
}
