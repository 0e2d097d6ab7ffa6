//! Traffic Control Advisor Library

pub mod advisor;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use advisor::{Advisor, DirectionalCounts, Recommendation, ThroughputTier};
pub use config::AdvisorConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
