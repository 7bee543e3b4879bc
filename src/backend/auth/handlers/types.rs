/**
 * Member Handler Types
 *
 * Request and response bodies shared by the sign-up, login and profile
 * handlers. `MemberResponse` is the only shape a member ever leaves the
 * server in; it has no password field.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::members::Member;

/// Login request
///
/// Both fields are optional at the type level so that a missing field is
/// reported as a 400 by the handler instead of a deserialization failure.
#[derive(Deserialize, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public member profile (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub church_role: String,
    pub is_active: bool,
    pub email_verified: bool,
    pub joined_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            phone: member.phone,
            date_of_birth: member.date_of_birth,
            gender: member.gender,
            address: member.address,
            church_role: member.church_role,
            is_active: member.is_active,
            email_verified: member.email_verified,
            joined_at: member.joined_at,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

/// Returned by sign-up and login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthData {
    pub member: MemberResponse,
    /// Bearer token, valid for 24 hours
    pub token: String,
}

/// Returned by the profile endpoint
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProfileData {
    pub member: MemberResponse,
}

/// Success envelope
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}
