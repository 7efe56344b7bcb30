use shared::models::Employee;
use sqlx::PgPool;

use crate::config::CodeMatch;

const EMPLOYEE_COLUMNS: &str = "id, company_id, display_name, scan_code, created_at";

pub async fn list(pool: &PgPool, company_id: i64) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!(
        "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE company_id = $1 ORDER BY id"
    ))
    .bind(company_id)
    .fetch_all(pool)
    .await
}

/// Look up the employee an activation code belongs to
pub async fn find_by_code(
    pool: &PgPool,
    company_id: i64,
    code: &str,
    mode: CodeMatch,
) -> Result<Option<Employee>, sqlx::Error> {
    let predicate = code_predicate(mode);
    sqlx::query_as::<_, Employee>(&format!(
        "SELECT {EMPLOYEE_COLUMNS} FROM employees
            WHERE company_id = $1 AND {predicate}
            ORDER BY id LIMIT 1"
    ))
    .bind(company_id)
    .bind(code)
    .fetch_optional(pool)
    .await
}

fn code_predicate(mode: CodeMatch) -> &'static str {
    match mode {
        CodeMatch::Exact => "scan_code = $2",
        CodeMatch::CaseInsensitive => "LOWER(scan_code) = LOWER($2)",
    }
}

/// Whether `code` would collide with an existing one under `mode`
pub async fn scan_code_exists(
    pool: &PgPool,
    company_id: i64,
    code: &str,
    mode: CodeMatch,
) -> Result<bool, sqlx::Error> {
    let predicate = code_predicate(mode);
    let row: (bool,) = sqlx::query_as(&format!(
        "SELECT EXISTS (SELECT 1 FROM employees WHERE company_id = $1 AND {predicate})"
    ))
    .bind(company_id)
    .bind(code)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}

/// Outcome of a capped insert
#[derive(Debug)]
pub enum InsertOutcome {
    Inserted(Employee),
    /// Company already has `max` employees
    LimitReached,
    /// Another employee of the company holds the code
    CodeTaken,
}

/// Insert an employee unless the company already has `max` of them
///
/// The company row is locked for the duration so concurrent inserts cannot
/// both pass the count check.
pub async fn insert_capped(
    pool: &PgPool,
    company_id: i64,
    display_name: &str,
    scan_code: &str,
    max: i64,
) -> Result<InsertOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT id FROM companies WHERE id = $1 FOR UPDATE")
        .bind(company_id)
        .execute(&mut *tx)
        .await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees WHERE company_id = $1")
        .bind(company_id)
        .fetch_one(&mut *tx)
        .await?;
    if count >= max {
        tx.rollback().await?;
        return Ok(InsertOutcome::LimitReached);
    }

    let inserted: Option<Employee> = sqlx::query_as(&format!(
        "INSERT INTO employees (company_id, display_name, scan_code)
            VALUES ($1, $2, $3)
            ON CONFLICT (company_id, scan_code) DO NOTHING
            RETURNING {EMPLOYEE_COLUMNS}"
    ))
    .bind(company_id)
    .bind(display_name)
    .bind(scan_code)
    .fetch_optional(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(match inserted {
        Some(employee) => InsertOutcome::Inserted(employee),
        None => InsertOutcome::CodeTaken,
    })
}
