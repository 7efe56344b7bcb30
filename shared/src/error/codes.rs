//! Error codes shared by the server and its clients
//!
//! Codes are grouped by leading digit:
//! - 0xxx: General
//! - 3xxx: Company errors
//! - 6xxx: Scan tag errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as `u16` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    /// Operation completed successfully
    Success = 0,

    /// No company has been set up yet
    CompanyNotFound = 3001,

    /// Scan tag id does not name a tag
    TagNotFound = 6401,

    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "OK",
            ErrorCode::CompanyNotFound => "No company has been set up",
            ErrorCode::TagNotFound => "Unknown scan tag",
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

/// Raised when a numeric value does not map to any [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            3001 => Ok(ErrorCode::CompanyNotFound),
            6401 => Ok(ErrorCode::TagNotFound),
            9001 => Ok(ErrorCode::InternalError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[ErrorCode] = &[
        ErrorCode::Success,
        ErrorCode::CompanyNotFound,
        ErrorCode::TagNotFound,
        ErrorCode::InternalError,
    ];

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::CompanyNotFound.code(), 3001);
        assert_eq!(ErrorCode::TagNotFound.code(), 6401);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_every_code_converts_back() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(*code));
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::TagNotFound).unwrap();
        assert_eq!(json, "6401");
        let back: ErrorCode = serde_json::from_str("3001").unwrap();
        assert_eq!(back, ErrorCode::CompanyNotFound);
        assert!(serde_json::from_str::<ErrorCode>("8001").is_err());
    }
}
