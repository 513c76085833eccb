//! Application builder.
//!
//! Assembles routes, middleware, and state into an Axum router.

use crate::{
    config::ApiConfig,
    error::{ApiError, ErrorResponse},
    middleware::{logging_middleware, request_id::REQUEST_ID_HEADER, request_id_middleware},
    routes,
    state::AppState,
};
use anyhow::{bail, Context};
use axum::{
    error_handling::HandleErrorLayer, http::HeaderValue, middleware, routing::get, BoxError,
    Json, Router,
};
use fastbreak_application::ApplicationError;
use tower::{
    timeout::{error::Elapsed, TimeoutLayer},
    ServiceBuilder,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

/// OpenAPI document for the service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fast Break Leaderboard API",
        description = "Score submission and leaderboard queries for the Fast Break game",
    ),
    paths(
        routes::scores::submit_score,
        routes::leaderboard::get_leaderboard,
        routes::health::health,
    ),
    components(schemas(
        fastbreak_application::SubmitScoreRequest,
        crate::responses::ScoreResponse,
        routes::leaderboard::LeaderboardResponse,
        routes::health::HealthResponse,
        routes::health::DatabaseHealth,
        ErrorResponse,
    )),
    tags(
        (name = "scores", description = "Score submission"),
        (name = "leaderboard", description = "Leaderboard queries"),
        (name = "health", description = "Health check"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
///
/// Fails when the CORS origin list cannot be turned into header values.
pub fn create_app(state: AppState) -> anyhow::Result<Router> {
    let config = state.config.clone();
    let cors = build_cors_layer(&config)?;

    let mut app = Router::new().merge(routes::routes());

    if config.enable_openapi {
        app = app.route("/api-docs/openapi.json", get(openapi_json));
    }

    let app = app
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Outermost so every response carries the ID, CORS preflights included
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .layer(TimeoutLayer::new(config.request_timeout()))
                .layer(middleware::from_fn(logging_middleware)),
        );

    Ok(app)
}

/// Build CORS layer from the configured allow-list
fn build_cors_layer(config: &ApiConfig) -> anyhow::Result<CorsLayer> {
    let mut origins = Vec::with_capacity(config.cors_allowed_origins.len());

    for origin in &config.cors_allowed_origins {
        if origin == "*" {
            bail!("wildcard CORS origin is not allowed with credentials; list origins explicitly");
        }
        let value = HeaderValue::from_str(origin)
            .with_context(|| format!("invalid CORS origin '{origin}'"))?;
        origins.push(value);
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .expose_headers([REQUEST_ID_HEADER.clone()]))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn handle_timeout_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Application(ApplicationError::Internal(err.to_string()))
    }
}
