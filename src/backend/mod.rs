//! Backend Module
//!
//! The Axum HTTP server for church member accounts: registration, login,
//! token-protected profile lookup, and a health check, backed by PostgreSQL.
//!
//! # Architecture
//!
//! - **`server`** - Initialization, application state, database setup
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Password hashing, session tokens, member handlers
//! - **`members`** - Member records and the `MemberStore` trait
//! - **`middleware`** - Bearer token verification
//! - **`error`** - HTTP-facing error types and the error envelope
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports
//! ├── main.rs         - Server binary
//! ├── server/         - Initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── members/        - Persistence
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the member store behind `Arc<dyn MemberStore>`, the token
//! keys and the bcrypt cost. Nothing else is shared between requests; the
//! PostgreSQL pool inside the store is the only pooled resource.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and member handlers
pub mod auth;

/// Member persistence
pub mod members;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::{create_app, create_app_with_store, AppState};
