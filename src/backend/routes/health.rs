//! Health check endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::backend::members::MemberStore;

pub const SERVICE_NAME: &str = "church-members";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Unreachable,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub database: DatabaseStatus,
}

/// Liveness check. Always 200 while the process is serving; the database
/// probe only changes the `database` field.
pub async fn health_check(State(members): State<Arc<dyn MemberStore>>) -> impl IntoResponse {
    let database = match members.ping().await {
        Ok(()) => DatabaseStatus::Connected,
        Err(e) => {
            tracing::warn!("Health check database probe failed: {}", e);
            DatabaseStatus::Unreachable
        }
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        database,
    };

    (StatusCode::OK, Json(response))
}
