use std::collections::BTreeMap;
use std::fmt::Debug;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::error::PersistenceError;
use crate::identifier::EntityId;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    /// Normalized parameters a new entity is built from
    type CreateParams: Send + Sync + Debug + 'static;
    /// Normalized partial update
    type Patch: Send + Sync + Debug + 'static;

    fn id(&self) -> EntityId;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: EntityId, params: Self::CreateParams) -> Self;

    fn on_update(&mut self, patch: Self::Patch);
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, PersistenceError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: EntityId,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: EntityId,
        patch: T::Patch,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: EntityId,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// In-memory store owning every entity of one type.
///
/// Entities are kept ordered by id, so listings come back in creation order.
/// The actor stops once every [`ResourceClient`] has been dropped.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<EntityId, T>,
    next_id: Option<EntityId>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Some(EntityId::FIRST),
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let result = self.allocate_id().map(|id| {
                        let item = T::from_create_params(id, params);
                        self.store.insert(id, item.clone());
                        debug!(entity_id = %id, "Stored new entity");
                        item
                    });
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let item = self.store.get_mut(&id).map(|item| {
                        item.on_update(patch);
                        item.clone()
                    });
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.remove(&id)));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
            }
        }

        info!("ResourceActor stopped");
    }

    fn allocate_id(&mut self) -> Result<EntityId, PersistenceError> {
        let Some(id) = self.next_id else {
            warn!("Rejecting create: identifier space exhausted");
            return Err(PersistenceError::IdSpaceExhausted);
        };
        self.next_id = id.successor();
        Ok(id)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self, params))]
    pub async fn create(&self, params: T::CreateParams) -> Result<T, PersistenceError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: EntityId) -> Result<Option<T>, PersistenceError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: EntityId, patch: T::Patch) -> Result<Option<T>, PersistenceError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: EntityId) -> Result<Option<T>, PersistenceError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<T>, PersistenceError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, PersistenceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| PersistenceError::ActorClosed)?;
        response.await.map_err(|_| PersistenceError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
