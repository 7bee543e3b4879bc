//! Route Configuration Module
//!
//! - **`router`** - main router assembly, CORS and tracing layers
//! - **`api_routes`** - member endpoints
//! - **`health`** - liveness endpoint
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - Member endpoints
//! └── health.rs       - GET /health
//! ```

/// Main router creation
pub mod router;

/// Member endpoints
pub mod api_routes;

/// Health check
pub mod health;

pub use router::{cors_layer, create_router};
