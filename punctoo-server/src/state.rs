//! Application state for punctoo-server

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::{CodeMatch, Config};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// Nothing here is mutable: every request works against the pool only.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Device token cookie name
    pub cookie_name: String,
    /// Mark the device cookie `Secure` (production only)
    pub secure_cookies: bool,
    /// Cooldown window in minutes
    pub cooldown_minutes: i64,
    /// Activation code comparison
    pub code_match: CodeMatch,
    /// Employee cap for the setup wizard
    pub max_employees: i64,
    /// Base URL for tag QR payloads
    pub public_base_url: Option<String>,
}

impl AppState {
    /// Connect, run migrations and build the state
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::from_pool(pool, config))
    }

    /// Build the state around an existing pool (migrations already applied)
    pub fn from_pool(pool: PgPool, config: &Config) -> Self {
        Self {
            pool,
            cookie_name: config.cookie_name.clone(),
            secure_cookies: config.is_production(),
            cooldown_minutes: config.cooldown_minutes,
            code_match: config.code_match,
            max_employees: config.max_employees,
            public_base_url: config.public_base_url.clone(),
        }
    }
}
