use crate::domain::requests::rules::field_errors;
use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use shared::errors::{FieldErrors, HttpError};
use validator::Validate;

/// JSON body that is deserialized and validated before the handler runs.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        json_value
            .validate()
            .map_err(|errors| HttpError::validation(field_errors(&errors)))?;

        Ok(Self(json_value))
    }
}

/// Well-formed JSON with wrong field types is a validation failure; anything
/// else (bad syntax, wrong content type) is a bad request.
fn json_rejection(rejection: JsonRejection) -> HttpError {
    if rejection.status() == StatusCode::UNPROCESSABLE_ENTITY {
        HttpError::validation(single_error("body", rejection.body_text()))
    } else {
        HttpError::BadRequest(rejection.body_text())
    }
}

/// Query string counterpart of [`SimpleValidatedJson`].
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                HttpError::validation(single_error("query", rejection.body_text()))
            })?;

        value
            .validate()
            .map_err(|errors| HttpError::validation(field_errors(&errors)))?;

        Ok(Self(value))
    }
}

fn single_error(field: &str, message: String) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), vec![message]);
    errors
}
