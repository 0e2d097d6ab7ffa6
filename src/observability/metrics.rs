//! Metrics collection and exposition.
//!
//! # Metrics
//! - `advisor_requests_total` (counter): requests by status
//! - `advisor_request_duration_seconds` (histogram): handler latency
//! - `advisor_recommendations_total` (counter): results by tier and outcome
//! - `advisor_query_errors_total` (counter): failed query parameters by name

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::advisor::{Recommendation, ThroughputTier};

/// Start the Prometheus scrape listener. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(status: u16, start: Instant) {
    counter!("advisor_requests_total", "status" => status.to_string()).increment(1);
    histogram!("advisor_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_recommendation(tier: ThroughputTier, recommendation: &Recommendation<'_>) {
    counter!(
        "advisor_recommendations_total",
        "tier" => tier.as_str(),
        "outcome" => recommendation.outcome()
    )
    .increment(1);
}

pub fn record_query_error(param: &'static str) {
    counter!("advisor_query_errors_total", "param" => param).increment(1);
}
