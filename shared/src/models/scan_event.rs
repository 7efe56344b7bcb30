//! Scan Event Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scan direction, stored as `'IN'` / `'OUT'`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "IN",
            Direction::Out => "OUT",
        }
    }

    /// Stable numeric key, used for per-direction advisory locks
    pub const fn lock_key(&self) -> i32 {
        match self {
            Direction::In => 1,
            Direction::Out => 2,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid scan direction: {0}")]
pub struct InvalidDirection(pub String);

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN" | "in" => Ok(Direction::In),
            "OUT" | "out" => Ok(Direction::Out),
            other => Err(InvalidDirection(other.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = InvalidDirection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Append-only scan event row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ScanEvent {
    pub id: i64,
    pub company_id: i64,
    pub employee_id: i64,
    pub scantag_id: i64,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub direction: Direction,
    pub timestamp: DateTime<Utc>,
}

/// Denormalized projection of a freshly recorded event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ScanEventView {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub scantag_id: i64,
    pub tag_name: String,
    pub company_name: String,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub direction: Direction,
    pub timestamp: DateTime<Utc>,
}

/// Result of a scan attempt that reached the recorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScanOutcome {
    Recorded { event: ScanEventView },
    Skipped { direction: Direction, reason: String },
}

impl ScanOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, ScanOutcome::Skipped { .. })
    }
}

/// What a scan URL answers with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScanResponse {
    Recorded {
        company_name: String,
        event: ScanEventView,
    },
    Skipped {
        company_name: String,
        direction: Direction,
        employee_name: String,
        reason: String,
    },
    /// The device has no binding for this tag's company
    ActivationRequired {
        company_name: String,
        tag_id: i64,
        direction: Direction,
        activate_url: String,
        hint: String,
    },
    /// Activation code did not match; the form should be shown again
    UnknownCode {
        company_name: String,
        tag_id: i64,
        retry_url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("IN".parse::<Direction>(), Ok(Direction::In));
        assert_eq!("out".parse::<Direction>(), Ok(Direction::Out));
        assert!("SIDEWAYS".parse::<Direction>().is_err());
        assert_eq!(Direction::try_from("OUT".to_string()), Ok(Direction::Out));
    }

    #[test]
    fn test_direction_serde_matches_storage() {
        assert_eq!(serde_json::to_string(&Direction::In).unwrap(), "\"IN\"");
        assert_eq!(Direction::Out.as_str(), "OUT");
        assert_ne!(Direction::In.lock_key(), Direction::Out.lock_key());
    }

    #[test]
    fn test_scan_response_tagged() {
        let resp = ScanResponse::Skipped {
            company_name: "ACME".into(),
            direction: Direction::In,
            employee_name: "JAN".into(),
            reason: "Cooldown (60 min)".into(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["outcome"], "skipped");
        assert_eq!(json["direction"], "IN");
    }
}
