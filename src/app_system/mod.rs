//! System orchestration, startup, and shutdown logic.

pub mod employee_system;
pub mod telemetry;

pub use employee_system::*;
pub use telemetry::*;
