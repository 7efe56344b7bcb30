//! Per-employee status, recomputed from the event log on every request

use chrono::{DateTime, Utc};
use shared::models::{AdminReport, AttendanceStatus, Direction, EmployeeReport, EmployeeStatus};
use shared::util::minutes_between;
use sqlx::PgPool;

use crate::db::{companies, employees, scan_events};

/// Reduce the latest IN and OUT into a status
///
/// No shift pairing: a completed status only says the latest OUT exists
/// alongside the latest IN. An OUT older than the IN gives zero minutes.
pub fn derive_status(
    last_in: Option<DateTime<Utc>>,
    last_out: Option<DateTime<Utc>>,
) -> EmployeeStatus {
    let (status, duration_minutes) = match (last_in, last_out) {
        (Some(i), Some(o)) => (AttendanceStatus::Completed, minutes_between(i, o)),
        (Some(_), None) => (AttendanceStatus::Open, 0),
        (None, Some(_)) => (AttendanceStatus::Inconsistent, 0),
        (None, None) => (AttendanceStatus::Unknown, 0),
    };
    EmployeeStatus {
        last_in,
        last_out,
        duration_minutes,
        status,
    }
}

pub async fn status_for(pool: &PgPool, employee_id: i64) -> Result<EmployeeStatus, sqlx::Error> {
    let last_in = scan_events::last_timestamp(pool, employee_id, Direction::In).await?;
    let last_out = scan_events::last_timestamp(pool, employee_id, Direction::Out).await?;
    Ok(derive_status(last_in, last_out))
}

/// Status of every employee of the pilot company; `None` before setup
pub async fn admin_report(pool: &PgPool) -> Result<Option<AdminReport>, sqlx::Error> {
    let Some(company) = companies::find(pool).await? else {
        return Ok(None);
    };

    let mut reports = Vec::new();
    for employee in employees::list(pool, company.id).await? {
        let status = status_for(pool, employee.id).await?;
        reports.push(EmployeeReport {
            employee_id: employee.id,
            display_name: employee.display_name,
            status,
        });
    }

    Ok(Some(AdminReport {
        company_id: company.id,
        company_name: company.name,
        employees: reports,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    #[test]
    fn test_completed() {
        let s = derive_status(Some(t(0)), Some(t(495)));
        assert_eq!(s.status, AttendanceStatus::Completed);
        assert_eq!(s.duration_minutes, 495);
    }

    #[test]
    fn test_completed_floors_partial_minutes() {
        let s = derive_status(Some(t(0)), Some(t(10) + Duration::seconds(59)));
        assert_eq!(s.duration_minutes, 10);
    }

    #[test]
    fn test_out_before_in_clamps_to_zero() {
        let s = derive_status(Some(t(120)), Some(t(0)));
        assert_eq!(s.status, AttendanceStatus::Completed);
        assert_eq!(s.duration_minutes, 0);
    }

    #[test]
    fn test_open() {
        let s = derive_status(Some(t(0)), None);
        assert_eq!(s.status, AttendanceStatus::Open);
        assert_eq!(s.duration_minutes, 0);
        assert_eq!(s.last_in, Some(t(0)));
    }

    #[test]
    fn test_inconsistent() {
        let s = derive_status(None, Some(t(0)));
        assert_eq!(s.status, AttendanceStatus::Inconsistent);
        assert_eq!(s.duration_minutes, 0);
    }

    #[test]
    fn test_unknown() {
        let s = derive_status(None, None);
        assert_eq!(s.status, AttendanceStatus::Unknown);
        assert_eq!(s.duration_minutes, 0);
    }
}
