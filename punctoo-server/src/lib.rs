//! punctoo-server: pilot employee time-clock
//!
//! Employees scan a shared QR tag to clock IN or OUT. A phone is bound to one
//! employee through a device cookie after a one-time activation, rapid repeat
//! scans are suppressed by a cooldown window, and the admin report derives each
//! employee's status from their latest IN and OUT.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod state;
pub mod util;

pub use config::Config;
pub use state::AppState;
