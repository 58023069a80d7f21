use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calc_core::RepositoryError;
use calc_core::calculations::{ConversionError, FinanceError, InputError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors returned by HTTP handlers, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request parameters.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Well-formed input the calculation cannot accept.
    #[error("{0}")]
    Unprocessable(String),

    #[error("internal error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn missing(param: &str) -> Self {
        Self::BadRequest(format!("missing required parameter '{param}'"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            error!(%detail, "request failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnknownQuantity(_) | ConversionError::UnknownUnit { .. } => {
                Self::BadRequest(err.to_string())
            }
            ConversionError::NegativeValue { .. }
            | ConversionError::BelowAbsoluteZero { .. }
            | ConversionError::NonFiniteValue => Self::Unprocessable(err.to_string()),
        }
    }
}

impl From<FinanceError> for ApiError {
    fn from(err: FinanceError) -> Self {
        Self::Unprocessable(err.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound("calculator not found".to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use calc_core::calculations::Quantity;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unknown_unit_is_a_bad_request() {
        let err = ApiError::from(ConversionError::UnknownUnit {
            quantity: Quantity::Length,
            unit: "parsec".to_string(),
        });

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn below_absolute_zero_is_unprocessable() {
        let err = ApiError::from(ConversionError::BelowAbsoluteZero {
            value: -300.0,
            unit: "°C".to_string(),
        });

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn repository_failures_hide_details() {
        let err = ApiError::from(RepositoryError::Database("disk I/O error".to_string()));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "internal error");
    }

    #[test]
    fn missing_record_is_not_found() {
        assert_eq!(
            ApiError::from(RepositoryError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
    }
}
