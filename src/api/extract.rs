use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

/// JSON body extractor that matches field names case-insensitively.
///
/// Top-level object keys are lowercased before decoding, so `{"Nome": ..}`
/// and `{"NOME": ..}` both fill `nome`. Decoding failures surface as
/// [`ApiError::Internal`].
#[derive(Debug, Clone)]
pub struct CaseInsensitiveJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for CaseInsensitiveJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Internal(rejection.body_text()))?;

        serde_json::from_value(lowercase_keys(value))
            .map(CaseInsensitiveJson)
            .map_err(|e| ApiError::Internal(format!("Failed to deserialize the JSON body: {}", e)))
    }
}

/// Lowercase the keys of a top-level JSON object; other values pass through.
pub fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map.into_iter().map(|(key, v)| (key.to_lowercase(), v)).collect()),
        other => other,
    }
}
