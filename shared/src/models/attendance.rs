//! Attendance status (admin report)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status derived from the latest IN and latest OUT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Both an IN and an OUT exist
    Completed,
    /// Only an IN exists
    Open,
    /// Only an OUT exists
    Inconsistent,
    /// No events
    Unknown,
}

/// Per-employee status as shown in the admin view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStatus {
    pub last_in: Option<DateTime<Utc>>,
    pub last_out: Option<DateTime<Utc>>,
    pub duration_minutes: i64,
    pub status: AttendanceStatus,
}

/// One row of the admin report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeReport {
    pub employee_id: i64,
    pub display_name: String,
    #[serde(flatten)]
    pub status: EmployeeStatus,
}

/// Admin report for the pilot company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminReport {
    pub company_id: i64,
    pub company_name: String,
    pub employees: Vec<EmployeeReport>,
}
