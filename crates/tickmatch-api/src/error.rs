use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tickmatch_types::TickmatchError;

/// Central error type for the API service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The engine is halted or inconsistent. Details are logged, not returned.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<TickmatchError> for ApiError {
    fn from(err: TickmatchError) -> Self {
        match err {
            TickmatchError::InvalidOrder { .. } | TickmatchError::InvalidOrderId(_) => {
                Self::BadRequest(err.to_string())
            }
            TickmatchError::OrderNotFound(_) => Self::NotFound(err.to_string()),
            TickmatchError::InvariantViolation { .. }
            | TickmatchError::EngineHalted { .. }
            | TickmatchError::Configuration(_) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_ERROR",
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use tickmatch_types::OrderId;

    use super::*;

    #[test]
    fn engine_errors_map_to_status() {
        let cases = [
            (
                TickmatchError::InvalidOrder {
                    reason: "size".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                TickmatchError::OrderNotFound(OrderId::new()),
                StatusCode::NOT_FOUND,
            ),
            (
                TickmatchError::InvariantViolation {
                    reason: "crossed".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                TickmatchError::EngineHalted {
                    reason: "crossed".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }
}
