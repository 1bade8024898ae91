//! HTTP glue for the phone number lookup microservice.
//!
//! This crate provides the axum router and the infrastructure it sits on:
//!
//! - [`AppState`]: pre-loaded phone directory for zero-latency access
//! - [`health`]: health check handlers for Kubernetes liveness/readiness probes
//! - [`response`]: the `{ success, message, data }` response envelope
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: structured JSON logging setup
//! - [`middleware`]: request tracking and metrics middleware
//!
//! The service follows a thin-handler pattern where all lookup logic
//! resides in `phonelookup-lib`; handlers only parse the path parameter,
//! call the library, and format the response.

#![deny(warnings)]

mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod response;
mod state;

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

use phonelookup_lib::{lookup_phone_number, LookupOutcome};

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_lookup_rejected, record_lookup_resolved, MetricsConfig,
    MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId};
pub use response::{handle_panic, ApiResponse, LookupEnvelope, INTERNAL_ERROR_MESSAGE};
pub use state::{AppState, AppStateError};

/// Build the service router with all routes and middleware attached.
///
/// Panics escaping the lookup path are converted to a generic 500
/// envelope by the catch-panic layer so callers never see internals.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/phonenumber/{phoneNumber}", get(lookup_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(CatchPanicLayer::custom(response::handle_panic))
        .layer(MetricsLayer)
        .with_state(state)
}

/// Handle `GET /api/phonenumber/{phoneNumber}` requests.
async fn lookup_handler(
    State(state): State<AppState>,
    Path(phone_number): Path<String>,
) -> ApiResponse {
    let outcome = lookup_phone_number(state.directory(), &phone_number);

    match &outcome {
        LookupOutcome::Found(info) => {
            record_lookup_resolved(&info.service_provider);
            info!(
                segment = %info.segment,
                province = %info.province,
                carrier = %info.service_provider,
                "phone number resolved"
            );
        }
        LookupOutcome::Rejected(rejection) => {
            record_lookup_rejected(rejection.as_str());
            info!(reason = rejection.as_str(), "phone number lookup rejected");
        }
    }

    ApiResponse::from(outcome)
}
