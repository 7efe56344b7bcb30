//! Server configuration, read once from the environment at start

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
}

/// How a presented activation code is compared with stored scan codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeMatch {
    #[default]
    Exact,
    CaseInsensitive,
}

impl CodeMatch {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "case_insensitive" | "case-insensitive" | "insensitive" => Self::CaseInsensitive,
            _ => Self::Exact,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | production
    pub environment: String,
    /// Name of the device token cookie
    pub cookie_name: String,
    /// Minimum minutes between two accepted scans of the same direction
    pub cooldown_minutes: i64,
    /// Activation code comparison
    pub code_match: CodeMatch,
    /// Pilot employee cap enforced by the setup wizard
    pub max_employees: i64,
    /// Base for QR payload URLs; falls back to the request Host header
    pub public_base_url: Option<String>,
    /// Connection pool size
    pub db_max_connections: u32,
}

pub const DEFAULT_COOKIE_NAME: &str = "punctoo_device_token";
pub const DEFAULT_COOLDOWN_MINUTES: i64 = 60;
pub const DEFAULT_MAX_EMPLOYEES: i64 = 2;

impl Config {
    /// Defaults for everything except the database URL
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            http_port: 3000,
            environment: "development".into(),
            cookie_name: DEFAULT_COOKIE_NAME.into(),
            cooldown_minutes: DEFAULT_COOLDOWN_MINUTES,
            code_match: CodeMatch::Exact,
            max_employees: DEFAULT_MAX_EMPLOYEES,
            public_base_url: None,
            db_max_connections: 5,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = get("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        let defaults = Self::with_database_url(database_url);

        Ok(Self {
            http_port: get("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            environment: get("ENVIRONMENT").unwrap_or(defaults.environment),
            cookie_name: get("COOKIE_NAME")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.cookie_name),
            cooldown_minutes: get("COOLDOWN_MINUTES")
                .and_then(|m| m.trim().parse::<i64>().ok())
                .filter(|m| *m >= 0)
                .unwrap_or(defaults.cooldown_minutes),
            code_match: get("CODE_MATCH")
                .map(|v| CodeMatch::parse(&v))
                .unwrap_or(defaults.code_match),
            max_employees: get("MAX_EMPLOYEES")
                .and_then(|m| m.parse::<i64>().ok())
                .filter(|m| *m > 0)
                .unwrap_or(defaults.max_employees),
            public_base_url: get("PUBLIC_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty()),
            db_max_connections: get("DB_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.db_max_connections),
            ..defaults
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
