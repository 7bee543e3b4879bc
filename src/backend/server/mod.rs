//! Server Module
//!
//! Server initialization and shared application state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool and schema setup
//! └── init.rs         - Server initialization and app creation
//! ```

/// Application state management
pub mod state;

/// Database pool and schema setup
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_app_with_store};
pub use state::AppState;
