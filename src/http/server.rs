//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the recommendation handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener and drain on shutdown
//! - Observability (metrics, correlation IDs)

use axum::{
    body::Body,
    extract::{RawQuery, State},
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::advisor::Advisor;
use crate::config::AdvisorConfig;
use crate::http::query::parse_counts;
use crate::http::request::{request_id, UuidRequestId};
use crate::http::response;
use crate::lifecycle::shutdown::ShutdownListener;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<Advisor>,
}

/// HTTP server for the advisor.
pub struct HttpServer {
    router: Router,
    config: AdvisorConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AdvisorConfig) -> Self {
        let state = AppState {
            advisor: Arc::new(config.advisor()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AdvisorConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(recommend_handler))
            .route("/{*path}", any(recommend_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %request_id(request),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            methods = self.config.methods.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Parse the four counts and answer with a recommendation.
async fn recommend_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let start_time = Instant::now();

    let response = match parse_counts(query.as_deref()) {
        Ok(counts) => {
            let advice = state.advisor.advise(counts);
            metrics::record_recommendation(advice.tier, &advice.recommendation);
            tracing::info!(
                north = counts.north,
                east = counts.east,
                south = counts.south,
                west = counts.west,
                total = advice.total,
                tier = %advice.tier,
                recommendation = %advice.recommendation,
                "Recommendation served"
            );
            response::recommendation(&advice.recommendation)
        }
        Err(errors) => {
            for error in &errors {
                tracing::warn!(param = error.param(), error = %error, "Failed to parse query parameter");
                metrics::record_query_error(error.param());
            }
            response::parse_failure(errors.len())
        }
    };

    metrics::record_request(response.status().as_u16(), start_time);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{ControlMethod, EfficiencyScores};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    async fn get(router: Router, uri: &str) -> (StatusCode, String, Option<String>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let id = response
            .headers()
            .get("x-request-id")
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap(), id)
    }

    fn default_router() -> Router {
        HttpServer::new(AdvisorConfig::default()).router()
    }

    #[tokio::test]
    async fn test_example_counts() {
        let (status, body, id) = get(default_router(), "/?north=5&east=5&south=5&west=0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "\"Roundabout or Traffic Lights is most efficient\"");
        assert!(id.is_some());
    }

    #[tokio::test]
    async fn test_single_recommendation() {
        let mut config = AdvisorConfig::default();
        config.methods = vec![
            ControlMethod::new("Roundabout", EfficiencyScores::new(50, 75, 90)),
            ControlMethod::new("Stop Signs", EfficiencyScores::new(20, 30, 40)),
        ];
        let router = HttpServer::new(config).router();

        let (status, body, _) = get(router, "/?north=10&east=10&south=0&west=0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "\"Roundabout is most efficient\"");
    }

    #[tokio::test]
    async fn test_invalid_parameter() {
        let (status, body, _) = get(default_router(), "/?north=abc&east=5&south=5&west=0").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "\"Error\"");
    }

    #[tokio::test]
    async fn test_error_per_failing_parameter() {
        let (status, body, _) = get(default_router(), "/?north=abc&south=5").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "\"Error\"\n\"Error\"\n\"Error\"");
    }

    #[tokio::test]
    async fn test_any_path_and_method() {
        let response = default_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/intersection?north=1&east=1&south=1&west=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_client_request_id_is_echoed() {
        let response = default_router()
            .oneshot(
                Request::builder()
                    .uri("/?north=1&east=1&south=1&west=1")
                    .header("x-request-id", "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "req-42");
    }
}
