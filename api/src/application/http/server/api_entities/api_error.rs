use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rotireps_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    InternalServerError { message: String, error: String },
}

/// Error body. `error` is only present on server errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    #[schema(example = "Please fill all of the input fields")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        if error.is_client_error() {
            return ApiError::BadRequest(error.to_string());
        }

        ApiError::InternalServerError {
            message: error.to_string(),
            error: error.detail().unwrap_or_default(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(message) => ApiErrorResponse {
                message,
                error: None,
            },
            ApiError::InternalServerError { message, error } => ApiErrorResponse {
                message,
                error: Some(error),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs the payload's `validator` rules.
#[derive(Debug, Clone)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                ApiError::BadRequest(rejection.body_text())
            })?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(first_validation_message(&errors)))?;

        Ok(ValidateJson(value))
    }
}

/// Field errors come back in a hash map; sort by field so the reported message is stable.
fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .find_map(|(field, field_errors)| {
            field_errors.first().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .unwrap_or_else(|| "Invalid request body".to_string())
}
