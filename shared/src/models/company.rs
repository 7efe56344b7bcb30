//! Company Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The pilot's single company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Create company payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCreate {
    #[serde(default)]
    pub name: String,
}
