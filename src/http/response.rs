//! Response bodies for the recommendation endpoint.
//!
//! Bodies are JSON strings. A failed request carries one `"Error"` per
//! failing query parameter, newline separated.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::advisor::Recommendation;

pub const ERROR_BODY: &str = "Error";

pub fn recommendation(recommendation: &Recommendation<'_>) -> Response {
    (StatusCode::OK, Json(recommendation.to_string())).into_response()
}

pub fn parse_failure(failures: usize) -> Response {
    let encoded = serde_json::Value::from(ERROR_BODY).to_string();
    let body = vec![encoded; failures.max(1)].join("\n");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
