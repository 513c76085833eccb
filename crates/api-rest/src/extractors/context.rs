//! Request context extractor.

use crate::{error::ApiError, middleware::RequestId};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use fastbreak_application::ServiceContext;

/// Per-request service context built from the request ID
#[derive(Debug, Clone)]
pub struct RequestContext(pub ServiceContext);

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Routes mounted without the request ID middleware still get a context.
        let correlation_id = parts
            .extensions
            .get::<RequestId>()
            .map(|id| id.as_str().to_string())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Ok(RequestContext(ServiceContext::new(correlation_id)))
    }
}

impl std::ops::Deref for RequestContext {
    type Target = ServiceContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
