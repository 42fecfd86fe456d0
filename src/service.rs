//! Validation and error translation in front of a [`Repository`].
//!
//! Every operation follows the same flow: check the identifier, then the
//! payload, delegate to the repository, and turn a missing record into
//! [`ServiceError::NotFound`]. The first failed check short-circuits, so a
//! rejected request never reaches the repository. Persistence failures are
//! passed through as [`Error::Persistence`] without reinterpretation.

use std::marker::PhantomData;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::Entity;
use crate::error::{Error, Result, ServiceError};
use crate::identifier::{parse_identifier, EntityId};
use crate::repository::Repository;
use crate::schema::{Schema, Validation};

/// Service layer for one entity type.
///
/// Holds nothing besides its two collaborators, so a single instance can
/// serve concurrent calls. Dropping an in-flight call drops the pending
/// repository request with it.
#[derive(Clone)]
pub struct EntityService<T, R, S> {
    repository: R,
    schema: S,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R, S> EntityService<T, R, S>
where
    T: Entity,
    R: Repository<T>,
    S: Schema<T>,
{
    pub fn new(repository: R, schema: S) -> Self {
        Self {
            repository,
            schema,
            _entity: PhantomData,
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn add(&self, payload: &Value) -> Result<T> {
        let params = accept_payload(self.schema.validate_create(payload))?;

        let entity = self.repository.add(params).await?;
        info!(entity_id = %entity.id(), "Entity created");
        Ok(entity)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: &str, payload: &Value) -> Result<T> {
        let id = accept_id(id)?;
        let patch = accept_payload(self.schema.validate_update(payload))?;

        let entity = found(id, self.repository.update(id, patch).await?)?;
        info!(entity_id = %id, "Entity updated");
        Ok(entity)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<T> {
        let id = accept_id(id)?;

        let entity = found(id, self.repository.remove(id).await?)?;
        info!(entity_id = %id, "Entity removed");
        Ok(entity)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<T>> {
        let entities = self.repository.list().await?;
        debug!(count = entities.len(), "Entities listed");
        Ok(entities)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<T> {
        let id = accept_id(id)?;
        found(id, self.repository.get_by_id(id).await?)
    }
}

fn accept_id(text: &str) -> Result<EntityId, ServiceError> {
    parse_identifier(text).ok_or_else(|| {
        warn!("Rejected malformed id");
        ServiceError::MalformedIdentifier
    })
}

fn accept_payload<P>(validation: Validation<P>) -> Result<P, ServiceError> {
    validation.into_result().map_err(|violations| {
        warn!(violations = violations.len(), "Rejected payload");
        ServiceError::malformed_payload(&violations)
    })
}

fn found<T>(id: EntityId, entity: Option<T>) -> Result<T, Error> {
    entity.ok_or_else(|| {
        debug!(entity_id = %id, "Entity not found");
        ServiceError::NotFound(id).into()
    })
}
