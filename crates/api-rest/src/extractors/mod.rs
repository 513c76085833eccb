//! Custom Axum extractors.
//!
//! This module provides reusable extractors for common patterns
//! like request context, query strings, and validated JSON payloads.

pub mod context;
pub mod query;
pub mod validated_json;

pub use context::RequestContext;
pub use query::ApiQuery;
pub use validated_json::ValidatedJson;
