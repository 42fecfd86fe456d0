//! Employee-specific entity behavior and payload rules.

pub mod entity;
pub mod schema;

pub use schema::*;
