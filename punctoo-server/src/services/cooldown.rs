use chrono::{DateTime, Duration, Utc};
use shared::models::Direction;
use sqlx::PgExecutor;

use crate::db::scan_events;

/// Decides whether a new event for (employee, direction) falls inside the
/// cooldown window of the previous one
///
/// Directions are independent: a recent IN never suppresses an OUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownGate {
    window_minutes: i64,
}

impl CooldownGate {
    pub fn new(window_minutes: i64) -> Self {
        Self {
            window_minutes: window_minutes.max(0),
        }
    }

    pub fn window_minutes(&self) -> i64 {
        self.window_minutes
    }

    pub fn window(&self) -> Duration {
        Duration::minutes(self.window_minutes)
    }

    /// Pure decision rule
    pub fn suppresses(&self, last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match last {
            None => false,
            Some(last) => now - last < self.window(),
        }
    }

    /// Storage-backed check against the latest event of the same direction
    pub async fn should_suppress<'e>(
        &self,
        executor: impl PgExecutor<'e>,
        employee_id: i64,
        direction: Direction,
        now: DateTime<Utc>,
    ) -> Result<bool, sqlx::Error> {
        let last = scan_events::last_timestamp(executor, employee_id, direction).await?;
        Ok(self.suppresses(last, now))
    }

    /// Reason reported for a suppressed scan
    pub fn reason(&self) -> String {
        format!("Cooldown ({} min)", self.window_minutes)
    }
}
