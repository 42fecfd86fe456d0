//! Port abstraction for entity persistence.
use async_trait::async_trait;

use crate::actor_framework::{Entity, ResourceClient};
use crate::error::PersistenceError;
use crate::identifier::EntityId;

/// Storage the service layer delegates to.
///
/// Lookups signal a missing record with `None`, never with a placeholder entity.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn add(&self, params: T::CreateParams) -> Result<T, PersistenceError>;

    async fn update(&self, id: EntityId, patch: T::Patch) -> Result<Option<T>, PersistenceError>;

    /// Remove a record, returning it as it was before removal.
    async fn remove(&self, id: EntityId) -> Result<Option<T>, PersistenceError>;

    async fn list(&self) -> Result<Vec<T>, PersistenceError>;

    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>, PersistenceError>;
}

#[async_trait]
impl<T: Entity> Repository<T> for ResourceClient<T> {
    async fn add(&self, params: T::CreateParams) -> Result<T, PersistenceError> {
        self.create(params).await
    }

    async fn update(&self, id: EntityId, patch: T::Patch) -> Result<Option<T>, PersistenceError> {
        ResourceClient::update(self, id, patch).await
    }

    async fn remove(&self, id: EntityId) -> Result<Option<T>, PersistenceError> {
        self.delete(id).await
    }

    async fn list(&self) -> Result<Vec<T>, PersistenceError> {
        ResourceClient::list(self).await
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>, PersistenceError> {
        self.get(id).await
    }
}
