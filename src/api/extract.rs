//! Request extractors with this API's error conventions.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::AppError;

/// JSON body extractor that rejects malformed input with a 400 and the
/// standard `{"error": ...}` body instead of axum's plain-text 422.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_parses() {
        let req = json_request(r#"{"name": "reading list"}"#);

        let AppJson(value) = AppJson::<serde_json::Value>::from_request(req, &())
            .await
            .unwrap();

        assert_eq!(value["name"], "reading list");
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_validation_error() {
        let req = json_request("{not json");

        let err = AppJson::<serde_json::Value>::from_request(req, &())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }
}
