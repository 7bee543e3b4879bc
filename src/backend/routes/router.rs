/**
 * Router Configuration
 *
 * Combines the member routes and the health check into a single Axum router,
 * with a JSON 404 fallback, request tracing and CORS.
 *
 * # Layer Order
 *
 * Layers wrap everything added before them, so the CORS layer is outermost
 * and answers preflight requests before tracing or routing sees them.
 */

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_member_routes;
use crate::backend::routes::health::health_check;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// - `POST /members/signup`, `POST /members/login`, `GET /members/profile`
/// - `GET /health`
/// - anything else: 404 in the error envelope
pub fn create_router(app_state: AppState, cors_origins: &[String]) -> Router<()> {
    let router = configure_member_routes(Router::new(), &app_state)
        .route("/health", get(health_check))
        .fallback(|| async { BackendError::NotFound("Route not found".to_string()) });

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(app_state)
}

/// CORS policy for the configured origins
///
/// `*` allows any origin without credentials. Otherwise only the listed
/// origins are allowed, with credentials; entries that are not valid header
/// values are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
}
