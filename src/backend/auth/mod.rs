//! Authentication Module
//!
//! Member registration, login and session tokens.
//!
//! # Architecture
//!
//! - **`passwords`** - bcrypt hashing and verification off the async runtime
//! - **`sessions`** - HS256 bearer tokens carrying the member id, email and role
//! - **`handlers`** - HTTP handlers for the member endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: payload validated → password hashed → member stored → token returned
//! 2. **Login**: member looked up → active flag checked → password verified → token returned
//! 3. **Profile**: token verified by the middleware → member re-read → profile returned
//!
//! # Security
//!
//! - Passwords are stored only as bcrypt hashes and never serialized
//! - Tokens expire 24 hours after issue, with no leeway
//! - Unknown email and wrong password give the same 401 response

/// bcrypt password hashing
pub mod passwords;

/// Session token issue and verification
pub mod sessions;

/// HTTP handlers for member endpoints
pub mod handlers;

pub use handlers::{get_profile, login, signup};
pub use handlers::{ApiResponse, AuthData, LoginRequest, MemberResponse, ProfileData};
pub use passwords::{hash_password, verify_password, PasswordError};
pub use sessions::{Claims, SessionKeys, TokenError};
