//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → query.rs (parse north/east/south/west)
//!     → advisor (recommendation)
//!     → response.rs (JSON string body)
//! ```

pub mod query;
pub mod request;
pub mod response;
pub mod server;

pub use query::{parse_counts, QueryError};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
