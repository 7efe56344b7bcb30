//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee with its activation code
///
/// `scan_code` is the secret an employee types on first scan to pair a phone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub company_id: i64,
    pub display_name: String,
    pub scan_code: String,
    pub created_at: DateTime<Utc>,
}

/// Create employee payload (the activation code is generated server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    #[serde(default)]
    pub display_name: String,
}
