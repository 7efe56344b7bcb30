//! Setup wizard overview

use serde::{Deserialize, Serialize};

use super::{Company, Employee, ScanTag};

/// Progress of the pilot setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupOverview {
    pub company: Option<Company>,
    pub employees: Vec<Employee>,
    pub scan_tag: Option<ScanTag>,
    pub max_employees: i64,
    pub company_ok: bool,
    pub employees_ok: bool,
    pub tag_ok: bool,
}

impl SetupOverview {
    pub fn new(
        company: Option<Company>,
        employees: Vec<Employee>,
        scan_tag: Option<ScanTag>,
        max_employees: i64,
    ) -> Self {
        Self {
            company_ok: company.is_some(),
            employees_ok: employees.len() as i64 == max_employees,
            tag_ok: scan_tag.is_some(),
            company,
            employees,
            scan_tag,
            max_employees,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.company_ok && self.employees_ok && self.tag_ok
    }
}
