use shared::error::AppError;
use shared::models::{Direction, ScanOutcome};
use sqlx::PgPool;

use super::CooldownGate;
use crate::db::scan_events;
use crate::error::ServiceResult;

/// Where an accepted event is recorded
#[derive(Debug, Clone, Copy)]
pub struct ScanTarget {
    pub company_id: i64,
    pub employee_id: i64,
    pub scantag_id: i64,
}

/// Record a scan unless the cooldown gate suppresses it
///
/// Lock, clock read, cooldown check and insert share one transaction. The
/// advisory lock serializes concurrent scans of the same (employee, direction),
/// so two of them can never both pass the gate. The database clock value read
/// under the lock is the one that gets stored.
pub async fn record(
    pool: &PgPool,
    gate: &CooldownGate,
    target: ScanTarget,
    direction: Direction,
) -> ServiceResult<ScanOutcome> {
    let ScanTarget {
        company_id,
        employee_id,
        scantag_id,
    } = target;

    let mut tx = pool.begin().await?;
    scan_events::lock(&mut *tx, employee_id, direction).await?;
    let now = scan_events::db_now(&mut *tx).await?;

    if gate
        .should_suppress(&mut *tx, employee_id, direction, now)
        .await?
    {
        tx.commit().await?;
        tracing::info!(employee_id, %direction, "Scan suppressed by cooldown");
        return Ok(ScanOutcome::Skipped {
            direction,
            reason: gate.reason(),
        });
    }

    let event_id = scan_events::insert(
        &mut *tx,
        company_id,
        employee_id,
        scantag_id,
        direction,
        now,
    )
    .await?;
    tx.commit().await?;

    let event = scan_events::find_view(pool, event_id)
        .await?
        .ok_or_else(|| AppError::internal(format!("Scan event {event_id} vanished after commit")))?;

    tracing::info!(event_id, employee_id, scantag_id, %direction, "Scan recorded");
    Ok(ScanOutcome::Recorded { event })
}
