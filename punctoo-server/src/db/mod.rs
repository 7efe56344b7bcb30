//! Database access layer
//!
//! Free functions over a `PgPool` (or a transaction connection where a caller
//! needs several statements to be atomic).

pub mod companies;
pub mod device_bindings;
pub mod employees;
pub mod scan_events;
pub mod scan_tags;

use sqlx::PgPool;

/// Full pilot reset: removes every row from every table in one transaction
pub async fn reset_all(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    // Children first
    for table in [
        "scan_events",
        "device_bindings",
        "scantags",
        "employees",
        "companies",
    ] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(())
}
