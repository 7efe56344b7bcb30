//! Shared types for the PUNCTOO time-clock
//!
//! Error codes, the API response envelope, and the domain models exchanged
//! between the server and whatever renders its responses.

pub mod error;
pub mod models;
pub mod util;

pub use error::{ApiResponse, AppError, ErrorCode};
