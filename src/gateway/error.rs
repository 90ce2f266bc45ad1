use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::model::UnknownFieldError;

use super::FIBERSHEET_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unknown field: {0}")]
    UnknownField(#[from] UnknownFieldError),

    #[error("no records to publish")]
    EmptyBatch,

    #[error("internal error: {0}")]
    InternalError(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, gateway_status) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            GatewayError::UnknownField(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_FIELD"),
            GatewayError::EmptyBatch => (StatusCode::BAD_REQUEST, "EMPTY_BATCH"),
            GatewayError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            FIBERSHEET_STATUS_HEADER,
            HeaderValue::from_static(gateway_status),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
