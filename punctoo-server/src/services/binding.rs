//! Device binding: one token ↔ one employee

use shared::models::{DeviceBinding, Employee, ResolvedBinding, ResolvedTag};
use sqlx::PgPool;

use crate::config::CodeMatch;
use crate::db::{device_bindings, employees};
use crate::error::ServiceResult;
use crate::util::generate_token;

/// Resolve the device cookie token; absent or unknown means "not activated"
pub async fn resolve_binding(
    pool: &PgPool,
    token: Option<&str>,
) -> Result<Option<ResolvedBinding>, sqlx::Error> {
    match token.filter(|t| !t.is_empty()) {
        Some(token) => device_bindings::resolve(pool, token).await,
        None => Ok(None),
    }
}

/// Binding that is valid for scans on a tag of `company_id`
pub async fn binding_for_company(
    pool: &PgPool,
    token: Option<&str>,
    company_id: i64,
) -> Result<Option<ResolvedBinding>, sqlx::Error> {
    Ok(resolve_binding(pool, token)
        .await?
        .filter(|binding| binding.company_id == company_id))
}

/// Last-writer-wins replacement of the employee's and the token's bindings
pub async fn bind(
    pool: &PgPool,
    company_id: i64,
    employee_id: i64,
    token: &str,
    stale_token: Option<&str>,
) -> Result<DeviceBinding, sqlx::Error> {
    device_bindings::replace(pool, company_id, employee_id, token, stale_token).await
}

/// Result of presenting an activation code on a tag
#[derive(Debug)]
pub enum Activation {
    /// The device is now bound; `token` goes into the cookie
    Bound {
        employee: Employee,
        binding: DeviceBinding,
        token: String,
    },
    UnknownCode,
}

/// Bind the presenting device to whoever owns `code` in the tag's company
///
/// A fresh token is minted on every activation. The device's previous token,
/// if it sent one, is released in the same transaction.
pub async fn activate(
    pool: &PgPool,
    tag: &ResolvedTag,
    code: &str,
    mode: CodeMatch,
    stale_token: Option<&str>,
) -> ServiceResult<Activation> {
    let code = code.trim();
    if code.is_empty() {
        return Ok(Activation::UnknownCode);
    }

    let Some(employee) = employees::find_by_code(pool, tag.company_id, code, mode).await? else {
        tracing::info!(tag_id = tag.tag_id, "Activation with unknown code");
        return Ok(Activation::UnknownCode);
    };

    let token = generate_token();
    let binding = bind(pool, tag.company_id, employee.id, &token, stale_token).await?;

    tracing::info!(
        employee_id = employee.id,
        binding_id = binding.id,
        tag_id = tag.tag_id,
        "Device activated"
    );
    Ok(Activation::Bound {
        employee,
        binding,
        token,
    })
}
