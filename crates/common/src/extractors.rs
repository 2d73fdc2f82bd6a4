//! Custom axum extractors for Folio

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::Error;

/// JSON extractor that validates the deserialized value automatically.
///
/// Replaces `Json<T>` + manual `.validate()` calls in handlers.
/// All input errors (deserialization + validation) return 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// JSON extractor for whole-document bodies that carry no field rules.
///
/// Same 400 error envelope as `ValidatedJson`, without the `Validate` bound.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

/// Rejection type shared by the JSON extractors
#[derive(Debug)]
pub enum JsonBodyRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        match self {
            JsonBodyRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            JsonBodyRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection::Json)?;
        Ok(JsonBody(value))
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        value.validate().map_err(|e| {
            JsonBodyRejection::Validation(Error::Validation(format!("Validation failed: {}", e)))
        })?;
        Ok(ValidatedJson(value))
    }
}
