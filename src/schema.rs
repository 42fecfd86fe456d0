//! Payload validation seam.
//!
//! A [`Schema`] turns a raw JSON payload into the normalized parameters an
//! [`Entity`] is created or patched with, or reports every violation it found.

use serde_json::Value;

use crate::actor_framework::Entity;

/// A single reason a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub message: String,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Outcome of validating a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T> {
    Valid(T),
    /// Violations in the order the schema reported them.
    Invalid(Vec<Violation>),
}

impl<T> Validation<T> {
    pub fn into_result(self) -> Result<T, Vec<Violation>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(violations) => Err(violations),
        }
    }
}

/// Validation rules for the two payload variants an entity accepts.
pub trait Schema<T: Entity>: Send + Sync {
    fn validate_create(&self, payload: &Value) -> Validation<T::CreateParams>;
    fn validate_update(&self, payload: &Value) -> Validation<T::Patch>;
}
