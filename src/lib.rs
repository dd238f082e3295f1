//! Sample HTTP service for CI pipeline demonstration.
//!
//! A minimal JSON API with a greeting endpoint, a health check, a static
//! user list, and a stateless calculator. It exists to give a CI pipeline
//! something real to build, test and deploy — not to solve a systems
//! problem.
//!
//! # Endpoints
//!
//! ```text
//! GET  /               greeting + version + environment
//! GET  /health         liveness check
//! GET  /api/users      static list of three users
//! POST /api/calculate  {a, b, operation} -> {result, operation, timestamp}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types and HTTP status mapping
//! - [`calc`]: Calculator validation and evaluation
//! - [`users`]: Static user records
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Request counters
//! - [`utils`]: Utility functions

pub mod api;
pub mod calc;
pub mod config;
pub mod error;
pub mod metrics;
pub mod users;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result};
