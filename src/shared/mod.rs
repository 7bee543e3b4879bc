//! Shared Module
//!
//! Types and checks that do not depend on the HTTP server or the database:
//! sign-up payload validation, member input types, configuration, and the
//! error types those produce.

/// Shared error types
pub mod error;

/// Member input types
pub mod member;

/// Sign-up payload validation
pub mod validation;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::FieldError;
pub use member::{Gender, NewMemberInput, DEFAULT_CHURCH_ROLE};
pub use validation::validate_signup;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, DatabaseSettings};
