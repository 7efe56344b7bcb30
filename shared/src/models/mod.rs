//! Data models
//!
//! Shared between the server and anything rendering its responses.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL).

pub mod attendance;
pub mod company;
pub mod device_binding;
pub mod employee;
pub mod scan_event;
pub mod scan_tag;
pub mod setup;

// Re-exports
pub use attendance::*;
pub use company::*;
pub use device_binding::*;
pub use employee::*;
pub use scan_event::*;
pub use scan_tag::*;
pub use setup::*;
