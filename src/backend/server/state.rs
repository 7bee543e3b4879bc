/**
 * Application State Management
 *
 * `AppState` is the single container shared by every handler: the member
 * store handle, the session signing keys and the bcrypt cost. The `FromRef`
 * implementations let handlers and middleware extract only the part they
 * need, following Axum's recommended pattern.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use church_members::backend::auth::sessions::SessionKeys;
 *
 * async fn handler(State(keys): State<SessionKeys>) {
 *     // verify a token with `keys`
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::members::MemberStore;

#[derive(Clone)]
pub struct AppState {
    /// Injected member store; the PostgreSQL implementation owns the pool
    pub members: Arc<dyn MemberStore>,

    /// Keys for issuing and verifying bearer tokens
    pub sessions: SessionKeys,

    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(members: Arc<dyn MemberStore>, sessions: SessionKeys, bcrypt_cost: u32) -> Self {
        Self {
            members,
            sessions,
            bcrypt_cost,
        }
    }
}

/// Implement FromRef for the member store handle
impl FromRef<AppState> for Arc<dyn MemberStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.members.clone()
    }
}

/// Implement FromRef for SessionKeys
///
/// Used by the auth middleware, which only needs to verify tokens.
impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
