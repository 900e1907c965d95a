//! JSON extractors that answer rejections with the [`ApiResponse`] envelope
//!
//! [`ApiJson`] only deserializes; [`ValidatedJson`] also runs `validator`
//! rules. Malformed JSON and rule violations are both answered with 400,
//! the same status domain validation uses. For rule violations the
//! offending field names are listed in `fields`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::ApiResponse;

/// `Json<T>` with an enveloped rejection.
pub struct ApiJson<T>(pub T);

pub struct ValidatedJson<T>(pub T);

pub enum JsonBodyRejection {
    Json(JsonRejection),
    Invalid(ValidationErrors),
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Json(rejection) => {
                let body = ApiResponse::<()>::error(format!("Invalid JSON: {}", rejection));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::Invalid(errors) => {
                let mut fields: Vec<String> = Vec::new();
                let mut messages: Vec<String> = Vec::new();
                for (field, errs) in errors.field_errors() {
                    fields.push(field.to_string());
                    for e in errs {
                        let msg = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string());
                        messages.push(format!("{}: {}", field, msg));
                    }
                }
                fields.sort();
                messages.sort();

                let mut body = ApiResponse::<()>::error(if messages.is_empty() {
                    "Validation failed".to_string()
                } else {
                    messages.join("; ")
                });
                body.fields = fields;
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection::Json)?;
        Ok(ApiJson(value))
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(value) = ApiJson::<T>::from_request(req, state).await?;
        value.validate().map_err(JsonBodyRejection::Invalid)?;
        Ok(ValidatedJson(value))
    }
}
