/**
 * Signup Handler
 *
 * This module implements the member registration handler for
 * POST /members/signup.
 *
 * # Registration Process
 *
 * 1. Validate the payload (every violated rule is reported)
 * 2. Check whether the email is already registered
 * 3. Hash the password with bcrypt
 * 4. Insert the member; the store assigns id and timestamps
 * 5. Issue a session token
 * 6. Return the public profile and the token
 *
 * Two concurrent sign-ups with the same email can both pass step 2; the
 * store's unique constraint rejects the loser in step 4 and it receives the
 * same 409 as the existence check.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use crate::backend::auth::handlers::types::{ApiResponse, AuthData};
use crate::backend::auth::passwords::hash_password;
use crate::backend::error::types::EMAIL_TAKEN;
use crate::backend::error::BackendError;
use crate::backend::members::NewMember;
use crate::backend::server::state::AppState;
use crate::shared::validate_signup;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Body is not JSON, or fails validation (all field errors listed)
/// * `409 Conflict` - A member with this email already exists
/// * `500 Internal Server Error` - Store, hashing or token failure
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), BackendError> {
    let Json(payload) = payload?;

    let input = validate_signup(&payload).map_err(|errors| {
        tracing::warn!(fields = errors.len(), "Signup payload failed validation");
        BackendError::Validation(errors)
    })?;
    tracing::info!("Signup request for email: {}", input.email);

    if state.members.find_by_email(&input.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", input.email);
        return Err(BackendError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let password_hash = hash_password(input.password.clone(), state.bcrypt_cost).await?;

    let member = state
        .members
        .insert(NewMember::new(input, password_hash))
        .await
        .inspect_err(|e| tracing::warn!("Member insert rejected: {}", e))?;

    let token = state.sessions.issue(&member)?;

    tracing::info!("Member registered: {} ({})", member.id, member.email);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Member registered successfully",
            AuthData {
                member: member.into(),
                token,
            },
        )),
    ))
}
