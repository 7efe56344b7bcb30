//! Pilot setup wizard: one company, one tag, a capped set of employees
//!
//! Conflicting or premature steps are no-ops; the caller always gets the
//! current setup state back.

use shared::models::{Company, Employee, SetupOverview};
use sqlx::PgPool;

use crate::config::CodeMatch;
use crate::db::{self, companies, employees, scan_tags};
use crate::error::{ServiceError, ServiceResult};
use crate::util::generate_scan_code;

/// Name given to the tag created with the company
pub const SCAN_TAG_NAME: &str = "ScanTag";

const SCAN_CODE_ATTEMPTS: usize = 10;

pub async fn overview(pool: &PgPool, max_employees: i64) -> Result<SetupOverview, sqlx::Error> {
    let company = companies::find(pool).await?;
    let (staff, tag) = match &company {
        Some(c) => (
            employees::list(pool, c.id).await?,
            scan_tags::find_for_company(pool, c.id).await?,
        ),
        None => (Vec::new(), None),
    };
    Ok(SetupOverview::new(company, staff, tag, max_employees))
}

/// Create the company and its tag; `None` for a blank name or when one exists
pub async fn create_company(pool: &PgPool, name: &str) -> Result<Option<Company>, sqlx::Error> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    match companies::create_with_tag(pool, name, SCAN_TAG_NAME).await? {
        Some((company, tag)) => {
            tracing::info!(company_id = company.id, tag_id = tag.id, "Company created");
            Ok(Some(company))
        }
        None => {
            tracing::info!("Company already exists, creation ignored");
            Ok(None)
        }
    }
}

/// Add an employee with a freshly generated activation code
///
/// `None` when the name is blank, no company exists yet, the cap is reached
/// or the code was taken concurrently. The new code must not collide with an
/// existing one under `code_match`, the rule activation lookups use.
pub async fn add_employee(
    pool: &PgPool,
    display_name: &str,
    max_employees: i64,
    code_match: CodeMatch,
) -> ServiceResult<Option<Employee>> {
    let display_name = display_name.trim();
    if display_name.is_empty() {
        return Ok(None);
    }
    let Some(company) = companies::find(pool).await? else {
        return Ok(None);
    };

    let scan_code = unique_scan_code(pool, company.id, code_match).await?;
    let outcome =
        employees::insert_capped(pool, company.id, display_name, &scan_code, max_employees)
            .await?;

    Ok(match outcome {
        employees::InsertOutcome::Inserted(employee) => {
            tracing::info!(employee_id = employee.id, "Employee added");
            Some(employee)
        }
        employees::InsertOutcome::LimitReached => {
            tracing::info!(max_employees, "Employee limit reached, addition ignored");
            None
        }
        employees::InsertOutcome::CodeTaken => {
            tracing::info!("Activation code taken concurrently, addition ignored");
            None
        }
    })
}

async fn unique_scan_code(
    pool: &PgPool,
    company_id: i64,
    code_match: CodeMatch,
) -> ServiceResult<String> {
    for _ in 0..SCAN_CODE_ATTEMPTS {
        let code = generate_scan_code();
        if !employees::scan_code_exists(pool, company_id, &code, code_match).await? {
            return Ok(code);
        }
    }
    Err(ServiceError::Db(
        format!("no free activation code after {SCAN_CODE_ATTEMPTS} attempts").into(),
    ))
}

/// Full pilot reset
pub async fn reset(pool: &PgPool) -> Result<(), sqlx::Error> {
    db::reset_all(pool).await?;
    tracing::info!("Pilot data reset");
    Ok(())
}
