/**
 * Profile Handler
 *
 * GET /members/profile returns the authenticated member's profile. The auth
 * middleware has already verified the token; this handler re-reads the member
 * so that a member removed after the token was issued gets a 404.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{ApiResponse, ProfileData};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthMember;
use crate::backend::server::state::AppState;

/// Get profile handler
///
/// # Errors
///
/// * `404 Not Found` - The token's member no longer exists
/// * `500 Internal Server Error` - Store failure
pub async fn get_profile(
    State(state): State<AppState>,
    AuthMember(auth): AuthMember,
) -> Result<Json<ApiResponse<ProfileData>>, BackendError> {
    tracing::debug!("Profile request for member {}", auth.member_id);

    let member = state
        .members
        .find_by_id(auth.member_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Member {} in token no longer exists", auth.member_id);
            BackendError::member_not_found()
        })?;

    Ok(Json(ApiResponse::ok(ProfileData {
        member: member.into(),
    })))
}
