//! Member and token fixtures

use chrono::{DateTime, Utc};
use church_members::backend::auth::sessions::SessionKeys;
use church_members::backend::members::Member;
use serde_json::{json, Value};

use super::app::{TestApp, TEST_SECRET};

/// Sign-up payload from the registration example
pub fn ada_signup() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "password": "verysecret",
        "phone": "+15551234567",
        "dateOfBirth": "1990-12-10",
        "gender": "female"
    })
}

/// Sign up Ada and return her id and token
pub async fn signup_ada(app: &TestApp) -> (i64, String) {
    let (status, body) = app.post_json("/members/signup", &ada_signup()).await;
    assert_eq!(status, 201, "signup failed: {body}");
    let id = body["data"]["member"]["id"].as_i64().expect("member id");
    let token = body["data"]["token"].as_str().expect("token").to_string();
    (id, token)
}

/// Token signed with the test secret as if issued at `issued_at`
pub fn token_issued_at(member: &Member, issued_at: DateTime<Utc>) -> String {
    SessionKeys::new(TEST_SECRET)
        .issue_at(member, issued_at)
        .expect("token encodes")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
