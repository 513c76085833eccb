//! HTTP middleware components.
//!
//! This module provides middleware for request/response processing including:
//! - Request ID propagation
//! - Request logging

pub mod logging;
pub mod request_id;

pub use logging::logging_middleware;
pub use request_id::{request_id_middleware, RequestId};
