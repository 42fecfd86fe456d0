use thiserror::Error;

use crate::identifier::EntityId;
use crate::schema::Violation;

/// User-facing failures raised by the service layer.
///
/// Each variant maps onto a transport status through [`ServiceError::status_code`];
/// `Display` yields the message shown to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("id field must be a positive integer and greater than zero")]
    MalformedIdentifier,
    #[error("{0}")]
    MalformedPayload(String),
    #[error("entity with id {0} is not found")]
    NotFound(EntityId),
}

impl ServiceError {
    /// Builds a payload rejection from the violations in the order they were reported.
    pub fn malformed_payload(violations: &[Violation]) -> Self {
        let message = violations
            .iter()
            .map(|violation| violation.message.as_str())
            .collect::<Vec<_>>()
            .join(",");
        Self::MalformedPayload(message)
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedIdentifier | Self::MalformedPayload(_) => 400,
            Self::NotFound(_) => 404,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Infrastructure failures from the persistence collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("persistence actor closed")]
    ActorClosed,
    #[error("persistence actor dropped the response")]
    ActorDropped,
    #[error("identifier space exhausted")]
    IdSpaceExhausted,
}

/// Everything a service call can fail with.
///
/// Only [`Error::Service`] is meant for callers; persistence failures pass
/// through untouched so they are never mistaken for a validation outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl Error {
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            Self::Persistence(_) => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
