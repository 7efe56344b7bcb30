//! Error category classification

use super::codes::ErrorCode;

/// Error category, derived from the code's leading digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 0xxx and unassigned ranges
    General,
    /// 3xxx
    Company,
    /// 6xxx
    Tag,
    /// 9xxx, logged when answered
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            3000..4000 => Self::Company,
            6000..7000 => Self::Tag,
            9000.. => Self::System,
            _ => Self::General,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
