use shared::models::{DeviceBinding, ResolvedBinding};
use sqlx::PgPool;

/// Token → binding joined with the employee's display name
pub async fn resolve(pool: &PgPool, token: &str) -> Result<Option<ResolvedBinding>, sqlx::Error> {
    sqlx::query_as::<_, ResolvedBinding>(
        "SELECT b.id AS binding_id, b.company_id, b.employee_id, e.display_name
            FROM device_bindings b
            JOIN employees e ON e.id = b.employee_id
            WHERE b.token = $1",
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

/// Replace whatever binding the employee, the new token or the device's
/// previous token had with a single fresh row
///
/// Delete and insert share one transaction. The employee row is locked first
/// so concurrent rebinds of the same employee queue instead of both inserting;
/// `FOR NO KEY UPDATE` leaves the foreign-key share locks taken by scans free.
pub async fn replace(
    pool: &PgPool,
    company_id: i64,
    employee_id: i64,
    token: &str,
    stale_token: Option<&str>,
) -> Result<DeviceBinding, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT id FROM employees WHERE id = $1 FOR NO KEY UPDATE")
        .bind(employee_id)
        .execute(&mut *tx)
        .await?;

    let removed = sqlx::query(
        "DELETE FROM device_bindings
            WHERE employee_id = $1 OR token = $2 OR token = $3",
    )
    .bind(employee_id)
    .bind(token)
    .bind(stale_token)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let binding: DeviceBinding = sqlx::query_as(
        "INSERT INTO device_bindings (company_id, employee_id, token)
            VALUES ($1, $2, $3)
            RETURNING id, company_id, employee_id, token, created_at",
    )
    .bind(company_id)
    .bind(employee_id)
    .bind(token)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    if removed > 0 {
        tracing::debug!(employee_id, removed, "Replaced previous device bindings");
    }
    Ok(binding)
}

pub async fn find_by_employee(
    pool: &PgPool,
    employee_id: i64,
) -> Result<Option<DeviceBinding>, sqlx::Error> {
    sqlx::query_as::<_, DeviceBinding>(
        "SELECT id, company_id, employee_id, token, created_at
            FROM device_bindings WHERE employee_id = $1",
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_token(
    pool: &PgPool,
    token: &str,
) -> Result<Option<DeviceBinding>, sqlx::Error> {
    sqlx::query_as::<_, DeviceBinding>(
        "SELECT id, company_id, employee_id, token, created_at
            FROM device_bindings WHERE token = $1",
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}
