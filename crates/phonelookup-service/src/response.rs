//! Response envelope for the lookup endpoint.
//!
//! Every response carries the same JSON shape:
//! `{ "success": bool, "message": string, "data": PhoneNumberInfo | null }`.
//! Successful lookups map to 200, expected rejections (validation or
//! unknown segment) to 400, and faults escaping the handler to 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use phonelookup_lib::{LookupOutcome, LookupRejection, PhoneNumberInfo};

/// Message returned when an unexpected fault escapes the lookup path.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Wire-format envelope shared by all lookup responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupEnvelope {
    /// Whether the lookup produced a record.
    pub success: bool,
    /// Failure message; empty on success.
    pub message: String,
    /// The resolved record, present only on success.
    pub data: Option<PhoneNumberInfo>,
}

/// Outcome of handling a lookup request, including the fault case.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    /// The number resolved to a record.
    Found(PhoneNumberInfo),
    /// The number was rejected by validation or not found.
    Rejected(LookupRejection),
    /// An unexpected fault escaped the lookup path.
    InternalError,
}

impl ApiResponse {
    /// HTTP status code for this response.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Found(_) => StatusCode::OK,
            Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the wire-format envelope for this response.
    pub fn envelope(&self) -> LookupEnvelope {
        match self {
            Self::Found(info) => LookupEnvelope {
                success: true,
                message: String::new(),
                data: Some(info.clone()),
            },
            Self::Rejected(rejection) => LookupEnvelope {
                success: false,
                message: rejection.to_string(),
                data: None,
            },
            Self::InternalError => LookupEnvelope {
                success: false,
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                data: None,
            },
        }
    }
}

impl From<LookupOutcome> for ApiResponse {
    fn from(outcome: LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Found(info) => Self::Found(info),
            LookupOutcome::Rejected(rejection) => Self::Rejected(rejection),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.envelope())).into_response()
    }
}

/// Panic handler for the catch-panic layer: log the fault and return
/// the generic internal-error envelope without leaking internals.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail = %detail, "panic escaped the lookup path");

    ApiResponse::InternalError.into_response()
}
