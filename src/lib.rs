//! Church Members - Main Library
//!
//! Member registration and authentication backend for a church community
//! application: sign-up, login and profile retrieval over PostgreSQL, guarded
//! by bcrypt password hashing and JWT bearer tokens.
//!
//! # Module Structure
//!
//! - **`shared`** - Store-independent types
//!   - Sign-up validation, member input types
//!   - Configuration loading
//!   - Error types
//!
//! - **`backend`** - Axum HTTP server
//!   - Member store (PostgreSQL and in-memory)
//!   - Password hashing and session tokens
//!   - Sign-up, login and profile handlers, auth middleware
//!   - Router, server state and startup
//!
//! # Usage
//!
//! ```rust,no_run
//! use church_members::backend::server::init::create_app;
//! use church_members::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
