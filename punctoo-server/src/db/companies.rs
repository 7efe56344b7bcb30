use shared::models::{Company, ScanTag};
use sqlx::PgPool;

use super::scan_tags;

/// The pilot company, if setup has created it
pub async fn find(pool: &PgPool) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>("SELECT id, name, created_at FROM companies ORDER BY id LIMIT 1")
        .fetch_optional(pool)
        .await
}

/// Create the singleton company and its scan tag atomically
///
/// Returns `None` when a company already exists; nothing is written then.
pub async fn create_with_tag(
    pool: &PgPool,
    name: &str,
    tag_name: &str,
) -> Result<Option<(Company, ScanTag)>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let company: Option<Company> = sqlx::query_as(
        "INSERT INTO companies (name) VALUES ($1)
            ON CONFLICT (singleton) DO NOTHING
            RETURNING id, name, created_at",
    )
    .bind(name)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(company) = company else {
        tx.rollback().await?;
        return Ok(None);
    };

    let tag = scan_tags::insert(&mut *tx, company.id, tag_name).await?;
    tx.commit().await?;
    Ok(Some((company, tag)))
}
