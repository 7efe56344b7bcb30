use shared::models::{ResolvedTag, ScanTag};
use sqlx::{PgConnection, PgPool};

/// Tag joined with its company, for the scan endpoints
pub async fn resolve(pool: &PgPool, tag_id: i64) -> Result<Option<ResolvedTag>, sqlx::Error> {
    sqlx::query_as::<_, ResolvedTag>(
        "SELECT t.id AS tag_id, t.name AS tag_name,
                c.id AS company_id, c.name AS company_name
            FROM scantags t
            JOIN companies c ON c.id = t.company_id
            WHERE t.id = $1",
    )
    .bind(tag_id)
    .fetch_optional(pool)
    .await
}

pub async fn find_for_company(
    pool: &PgPool,
    company_id: i64,
) -> Result<Option<ScanTag>, sqlx::Error> {
    sqlx::query_as::<_, ScanTag>(
        "SELECT id, company_id, name FROM scantags WHERE company_id = $1 ORDER BY id LIMIT 1",
    )
    .bind(company_id)
    .fetch_optional(pool)
    .await
}

/// Every tag with its company name, oldest first
pub async fn list_resolved(pool: &PgPool) -> Result<Vec<ResolvedTag>, sqlx::Error> {
    sqlx::query_as::<_, ResolvedTag>(
        "SELECT t.id AS tag_id, t.name AS tag_name,
                c.id AS company_id, c.name AS company_name
            FROM scantags t
            JOIN companies c ON c.id = t.company_id
            ORDER BY t.id",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(
    conn: &mut PgConnection,
    company_id: i64,
    name: &str,
) -> Result<ScanTag, sqlx::Error> {
    sqlx::query_as::<_, ScanTag>(
        "INSERT INTO scantags (company_id, name) VALUES ($1, $2)
            RETURNING id, company_id, name",
    )
    .bind(company_id)
    .bind(name)
    .fetch_one(conn)
    .await
}
