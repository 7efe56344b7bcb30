//! Service layer: the time-clock rules on top of the storage functions
//!
//! - [`cooldown`]: suppresses repeated scans inside the cooldown window
//! - [`recorder`]: appends accepted scan events
//! - [`binding`]: device token ↔ employee bindings and activation
//! - [`status`]: per-employee status and the admin report
//! - [`setup`]: pilot setup wizard

pub mod binding;
pub mod cooldown;
pub mod recorder;
pub mod setup;
pub mod status;

pub use binding::Activation;
pub use cooldown::CooldownGate;
