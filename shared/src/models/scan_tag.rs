//! Scan Tag Model

use serde::{Deserialize, Serialize};

/// Physical QR tag: a place, not a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ScanTag {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
}

/// Tag joined with its company, as resolved from a scan URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ResolvedTag {
    pub tag_id: i64,
    pub tag_name: String,
    pub company_id: i64,
    pub company_name: String,
}

/// IN/OUT URLs encoded in a tag's two QR codes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagLinks {
    pub tag_id: i64,
    pub tag_name: String,
    pub company_name: String,
    pub in_url: String,
    pub out_url: String,
}
