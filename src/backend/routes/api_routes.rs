/**
 * Member Route Handlers
 *
 * # Routes
 *
 * - `POST /members/signup` - Member registration (public)
 * - `POST /members/login` - Member login (public)
 * - `GET /members/profile` - Authenticated member's profile (bearer token)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_profile, login, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure member routes
///
/// The profile route sits behind `auth_middleware`; `route_layer` keeps the
/// middleware off the public routes and off unmatched paths.
pub fn configure_member_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/members/profile", get(get_profile))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router
        .route("/members/signup", post(signup))
        .route("/members/login", post(login))
        .merge(protected)
}
