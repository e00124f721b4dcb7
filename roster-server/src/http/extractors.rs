//! Custom Axum extractors
//!
//! Wrap axum's rejections so malformed input gets the same `{"detail": ...}`
//! body as every other error. Anything that fails type coercion is 422.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract an integer user id from the path
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i32> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::unprocessable(rejection.body_text()))?;

        Ok(Self(id))
    }
}

/// JSON request body with `ApiError` rejections
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
/// Syntax and shape errors are both 422; only failing to read the body
/// keeps axum's status.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Rejected {
                status: rejection.status(),
                detail: rejection.body_text(),
            })?;

        let Json(value) = Json::<T>::from_bytes(&body)
            .map_err(|rejection| ApiError::unprocessable(rejection.body_text()))?;

        Ok(Self(value))
    }
}
