//! Append-only scan event storage

use chrono::{DateTime, Utc};
use shared::models::{Direction, ScanEvent, ScanEventView};
use sqlx::{PgConnection, PgExecutor, PgPool};

/// Advisory lock key for one (employee, direction) pair
pub fn lock_key(employee_id: i64, direction: Direction) -> i64 {
    (employee_id << 2) | i64::from(direction.lock_key())
}

/// Serialize cooldown check and insert for (employee, direction) until the
/// surrounding transaction ends
pub async fn lock(
    conn: &mut PgConnection,
    employee_id: i64,
    direction: Direction,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(lock_key(employee_id, direction))
        .execute(conn)
        .await?;
    Ok(())
}

/// Wall-clock time of the database, advancing within a transaction
pub async fn db_now(conn: &mut PgConnection) -> Result<DateTime<Utc>, sqlx::Error> {
    sqlx::query_scalar("SELECT clock_timestamp()")
        .fetch_one(conn)
        .await
}

/// Latest timestamp for (employee, direction), if any event exists
pub async fn last_timestamp<'e>(
    executor: impl PgExecutor<'e>,
    employee_id: i64,
    direction: Direction,
) -> Result<Option<DateTime<Utc>>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
        "SELECT MAX(timestamp) FROM scan_events WHERE employee_id = $1 AND direction = $2",
    )
    .bind(employee_id)
    .bind(direction.as_str())
    .fetch_one(executor)
    .await
}

pub async fn insert(
    conn: &mut PgConnection,
    company_id: i64,
    employee_id: i64,
    scantag_id: i64,
    direction: Direction,
    timestamp: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO scan_events (company_id, employee_id, scantag_id, direction, timestamp)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id",
    )
    .bind(company_id)
    .bind(employee_id)
    .bind(scantag_id)
    .bind(direction.as_str())
    .bind(timestamp)
    .fetch_one(conn)
    .await
}

pub async fn find(pool: &PgPool, event_id: i64) -> Result<Option<ScanEvent>, sqlx::Error> {
    sqlx::query_as::<_, ScanEvent>(
        "SELECT id, company_id, employee_id, scantag_id, direction, timestamp
            FROM scan_events WHERE id = $1",
    )
    .bind(event_id)
    .fetch_optional(pool)
    .await
}

/// Event joined with employee, tag and company names
pub async fn find_view(pool: &PgPool, event_id: i64) -> Result<Option<ScanEventView>, sqlx::Error> {
    sqlx::query_as::<_, ScanEventView>(
        "SELECT s.id, s.employee_id, e.display_name AS employee_name,
                s.scantag_id, t.name AS tag_name, c.name AS company_name,
                s.direction, s.timestamp
            FROM scan_events s
            JOIN employees e ON e.id = s.employee_id
            JOIN scantags t ON t.id = s.scantag_id
            JOIN companies c ON c.id = s.company_id
            WHERE s.id = $1",
    )
    .bind(event_id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_keys_are_direction_scoped() {
        assert_ne!(lock_key(7, Direction::In), lock_key(7, Direction::Out));
        assert_ne!(lock_key(7, Direction::Out), lock_key(8, Direction::In));
        assert_eq!(lock_key(1, Direction::In), 5);
    }
}
