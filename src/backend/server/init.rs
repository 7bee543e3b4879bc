/**
 * Server Initialization
 *
 * This module wires configuration, the database pool and the router into a
 * ready-to-serve Axum application.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL (bounded retries)
 * 2. Apply the schema
 * 3. Build the member store and session keys into `AppState`
 * 4. Create the router with CORS and request tracing
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::StartupError;
use crate::backend::members::{MemberStore, PgMemberStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{apply_schema, connect_database};
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application backed by PostgreSQL
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing church members backend");

    let pool = connect_database(&config.database_url, &config.database).await?;
    apply_schema(&pool).await?;

    let store = PgMemberStore::new(pool, config.database.query_timeout);
    let app = create_app_with_store(config, Arc::new(store));

    tracing::info!("Router configured");
    Ok(app)
}

/// Build the application around an already constructed store
pub fn create_app_with_store(config: &AppConfig, members: Arc<dyn MemberStore>) -> Router<()> {
    let state = AppState::new(
        members,
        SessionKeys::new(&config.jwt_secret),
        config.bcrypt_cost,
    );

    create_router(state, &config.cors_origins)
}
