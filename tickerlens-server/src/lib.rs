//! HTTP surface for tickerlens.
//!
//! One endpoint, `/api/handler`:
//! - `GET ?ticker=SYM` returns the combined report as JSON (200), a missing-ticker
//!   error (400) or the failing step's message (500).
//! - `OPTIONS` returns 200 with an empty body.
//!
//! Every response carries permissive CORS headers.
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody};
pub use routes::{HANDLER_PATH, build_router};
