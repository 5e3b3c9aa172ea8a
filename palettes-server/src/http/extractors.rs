//! Custom Axum extractors
//!
//! Each one rejects with [`ApiError`], so malformed input never reaches a
//! handler or the store.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{ProjectFilter, ValidationError};

/// Extract an integer row id from the `{id}` path segment
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
        };

        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        id.parse::<i64>().map(Self).map_err(|_| invalid())
    }
}

/// Project listing filter, validated against the allowed query parameters
pub struct ProjectQuery(pub ProjectFilter);

impl<S> FromRequestParts<S> for ProjectQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(ValidationError::Malformed(e.body_text())))?;

        Ok(Self(ProjectFilter::from_params(params)?))
    }
}

/// JSON body whose rejections map to 422 with a string message.
///
/// A body sent without a JSON content type is ignored and read as an empty
/// object, so field validation reports what is missing.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(Self(T::default())),
            Err(e) => Err(ApiError::Validation(ValidationError::Malformed(e.body_text()))),
        }
    }
}
