//! Request counters for monitoring.
//!
//! Counters are recorded through the `metrics` facade; wiring an exporter
//! is left to the deployment.

use metrics::{counter, describe_counter};
use tracing::debug;

// === Metric Name Constants ===

/// Requests served counter metric name (labelled by endpoint).
pub const METRIC_REQUESTS: &str = "requests_total";
/// Successful calculations counter metric name.
pub const METRIC_CALCULATIONS: &str = "calculations_total";
/// Rejected/failed calculations counter metric name.
pub const METRIC_CALCULATIONS_FAILED: &str = "calculations_failed_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_REQUESTS, "Total number of requests served");
    describe_counter!(
        METRIC_CALCULATIONS,
        "Total number of calculations performed"
    );
    describe_counter!(
        METRIC_CALCULATIONS_FAILED,
        "Total number of calculation requests rejected or failed"
    );

    debug!("Metrics initialized");
}

/// Increment the request counter for an endpoint.
pub fn inc_requests(endpoint: &'static str) {
    counter!(METRIC_REQUESTS, "endpoint" => endpoint).increment(1);
}

/// Increment the successful calculations counter.
pub fn inc_calculations() {
    counter!(METRIC_CALCULATIONS).increment(1);
}

/// Increment the failed calculations counter.
pub fn inc_calculations_failed() {
    counter!(METRIC_CALCULATIONS_FAILED).increment(1);
}
