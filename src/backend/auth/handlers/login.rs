/**
 * Login Handler
 *
 * This module implements the member authentication handler for
 * POST /members/login.
 *
 * # Authentication Process
 *
 * 1. Require a non-empty email and password
 * 2. Look up the member by email
 * 3. Refuse deactivated accounts
 * 4. Verify the password with bcrypt
 * 5. Issue a session token and return it with the profile
 *
 * An unknown email and a wrong password produce byte-identical 401
 * responses. Stored emails and passwords never contain NUL, so input that
 * does is rejected as invalid credentials without reaching the store or
 * bcrypt. A deactivated account is reported with its own message before
 * the password is checked.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{ApiResponse, AuthData, LoginRequest};
use crate::backend::auth::passwords::verify_password;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Body is not JSON, or email/password missing or empty
/// * `401 Unauthorized` - Unknown email, wrong password, or deactivated account
/// * `500 Internal Server Error` - Store, hashing or token failure
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AuthData>>, BackendError> {
    let Json(request) = payload?;

    let email = request.email.as_deref().map(str::trim).unwrap_or_default();
    let password = request.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(BackendError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    tracing::info!("Login request for email: {:?}", email);

    if email.contains('\0') {
        tracing::warn!("Login failed: email contains NUL");
        return Err(BackendError::invalid_credentials());
    }

    let member = match state.members.find_by_email(email).await? {
        Some(member) => member,
        None => {
            tracing::warn!("Login failed: unknown email {}", email);
            return Err(BackendError::invalid_credentials());
        }
    };

    if !member.is_active {
        tracing::warn!("Login refused: member {} is deactivated", member.id);
        return Err(BackendError::account_deactivated());
    }

    if password.contains('\0') || !verify_password(password, member.password_hash.clone()).await? {
        tracing::warn!("Login failed: wrong password for member {}", member.id);
        return Err(BackendError::invalid_credentials());
    }

    let token = state.sessions.issue(&member)?;

    tracing::info!("Member logged in: {} ({})", member.id, member.email);

    Ok(Json(ApiResponse::with_message(
        "Login successful",
        AuthData {
            member: member.into(),
            token,
        },
    )))
}
