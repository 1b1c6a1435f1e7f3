//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the ports held by the shared `AppContext`.

use axum::Router;
use axum::http::Uri;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AppContext, CorsConfig};
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without `/api` prefix (for nesting under /api).
///
/// Returns a router typed as `Router<AppState>` (state inferred from handlers)
/// but WITHOUT `.with_state()` applied. The caller must apply `.with_state()`
/// before nesting.
///
/// Hub ids carry at most one slash, so the download action is registered for
/// both the plain and the namespaced form; axum cannot put a wildcard
/// mid-path. The `{author}` parameter name is shared across the overlapping
/// patterns on purpose.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Models API
        .route("/models", get(handlers::models::list))
        .route("/models/{author}/{name}", get(handlers::models::detail))
        .route("/models/{author}/download", post(handlers::models::download))
        .route(
            "/models/{author}/{name}/download",
            post(handlers::models::download_namespaced),
        )
        // Ollama API
        .route(
            "/ollama/test-connection",
            post(handlers::ollama::test_connection),
        )
        .route("/ollama/local-models", get(handlers::ollama::local_models))
        .route("/ollama/pull-model", post(handlers::ollama::pull_model))
        // Settings API
        .route(
            "/settings",
            get(handlers::settings::get)
                .put(handlers::settings::update)
                .patch(handlers::settings::update),
        )
        // Unknown API paths get a structured 404 body instead of the SPA page
        .fallback(api_not_found)
}

/// Create the main Axum router with all API routes.
///
/// This creates the API routes only. For serving static assets,
/// use [`create_spa_router`] which includes both API routes and
/// static file serving with SPA fallback.
pub fn create_router(ctx: AppContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Create a router with API routes and static asset serving.
///
/// This creates a complete SPA-ready router that:
/// 1. Serves API routes under `/api/*` and `/health`
/// 2. Serves static assets from `static_dir` for matching files
/// 3. Falls back to `index.html` for client-side routing (SPA mode)
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AppContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let static_path = static_dir.as_ref();
    let index_path = static_path.join("index.html");

    // Static file serving with SPA fallback to index.html for unmatched paths
    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(&index_path));

    // API routes keep their own 404 behavior; everything else falls through
    // to static/SPA serving
    let api = create_router(ctx, cors_config);
    api.fallback_service(serve_dir)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

/// Structured 404 for unrecognized API paths.
async fn api_not_found(uri: Uri) -> HttpError {
    HttpError::NotFound(format!("No API route for {uri}"))
}
