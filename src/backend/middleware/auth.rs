/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in member. The middleware reads the
 * `Authorization: Bearer <token>` header, verifies the token, and attaches the
 * token's identity to the request extensions for handlers to extract.
 *
 * # Failure Responses
 *
 * - Header missing, not a Bearer header, or empty token: 401 "Access token required"
 * - Malformed, tampered or expired token: 403 "Invalid or expired token"
 *
 * The member is not looked up here; handlers that need the stored record read
 * it themselves.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::BackendError;

/// Identity carried by a verified token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedMember {
    pub member_id: i64,
    pub email: String,
    pub role: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token signature and expiry
/// 3. Attaches `AuthenticatedMember` to the request extensions
pub async fn auth_middleware(
    State(keys): State<SessionKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(&request).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::token_required()
    })?;

    let claims = keys.verify(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        BackendError::token_invalid()
    })?;

    let member_id = claims.member_id().map_err(|_| BackendError::token_invalid())?;

    request.extensions_mut().insert(AuthenticatedMember {
        member_id,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Bearer token from the Authorization header, if present and non-empty
fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Axum extractor for the authenticated member
///
/// Only valid on routes behind `auth_middleware`; elsewhere it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthMember(pub AuthenticatedMember);

impl<S> FromRequestParts<S> for AuthMember
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedMember>()
            .cloned()
            .map(AuthMember)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedMember not found in request extensions");
                BackendError::token_required()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::members::Member;
    use axum::{
        body::Body,
        http::StatusCode,
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use chrono::{Duration, Utc};
    use tower::ServiceExt;

    fn member() -> Member {
        let now = Utc::now();
        Member {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            date_of_birth: None,
            gender: None,
            address: None,
            church_role: "member".to_string(),
            password_hash: "hash".to_string(),
            is_active: true,
            email_verified: false,
            joined_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    fn app(keys: SessionKeys) -> Router {
        Router::new()
            .route(
                "/protected",
                get(|AuthMember(auth): AuthMember| async move { auth.member_id.to_string() }),
            )
            .route_layer(from_fn_with_state(keys, auth_middleware))
    }

    async fn status_for(authorization: Option<String>) -> StatusCode {
        let keys = SessionKeys::new("test-secret");
        let mut builder = axum::http::Request::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        app(keys)
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_valid_token_passes() {
        let keys = SessionKeys::new("test-secret");
        let token = keys.issue(&member()).unwrap();
        assert_eq!(status_for(Some(format!("Bearer {token}"))).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_or_malformed_header_is_401() {
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(Some("Token abc".to_string())).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(Some("Bearer ".to_string())).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bad_token_is_403() {
        assert_eq!(status_for(Some("Bearer garbage".to_string())).await, StatusCode::FORBIDDEN);

        let other = SessionKeys::new("another-secret").issue(&member()).unwrap();
        assert_eq!(status_for(Some(format!("Bearer {other}"))).await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_expired_token_is_403() {
        let keys = SessionKeys::new("test-secret");
        let token = keys
            .issue_at(&member(), Utc::now() - Duration::hours(25))
            .unwrap();
        assert_eq!(status_for(Some(format!("Bearer {token}"))).await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_is_401() {
        let router: Router = Router::new().route(
            "/open",
            get(|AuthMember(auth): AuthMember| async move { auth.email }),
        );
        let response = router
            .oneshot(axum::http::Request::builder().uri("/open").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
