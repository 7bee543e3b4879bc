//! Common test utilities and helpers
//!
//! - In-process application with an in-memory member store
//! - Request helpers returning status and parsed JSON
//! - Member and token fixtures
//! - Envelope assertions
//! - PostgreSQL fixture for the ignored database tests

#![allow(dead_code, unused_imports)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use app::*;
pub use assertions::*;
pub use auth_helpers::*;
