//! Member Handlers Module
//!
//! HTTP handlers for the member endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Member registration
//! ├── login.rs    - Member authentication
//! └── profile.rs  - Authenticated member's profile
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /members/signup
//! - **`login`** - POST /members/login
//! - **`get_profile`** - GET /members/profile (requires a bearer token)
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::{get, post}, Router};
//! use church_members::backend::auth::handlers::{get_profile, login, signup};
//! use church_members::backend::server::AppState;
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/members/signup", post(signup))
//!     .route("/members/login", post(login))
//!     .route("/members/profile", get(get_profile));
//! ```

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

pub use types::{ApiResponse, AuthData, LoginRequest, MemberResponse, ProfileData};

pub use login::login;
pub use profile::get_profile;
pub use signup::signup;
