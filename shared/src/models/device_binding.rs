//! Device Binding Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exclusive association between one device token and one employee
///
/// The token is a bearer credential and never leaves the server in a body;
/// it only travels in the device cookie.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DeviceBinding {
    pub id: i64,
    pub company_id: i64,
    pub employee_id: i64,
    #[serde(skip_serializing)]
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// Binding resolved from a cookie token, joined with the employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ResolvedBinding {
    pub binding_id: i64,
    pub company_id: i64,
    pub employee_id: i64,
    pub display_name: String,
}

/// Activation form posted from the pairing page
///
/// `tag_id` stays raw text so a malformed id is reported like an unknown tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivateRequest {
    #[serde(default, alias = "tagId")]
    pub tag_id: String,
    #[serde(default, alias = "employee_code", alias = "scan_code")]
    pub code: String,
}
