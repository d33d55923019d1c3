use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_models::error::AppError;

/// Anything storable in a repository: identified by a stable Uuid.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    /// Short name used in log lines and not-found messages.
    fn kind() -> &'static str;
}

/// Capability contract the cells depend on instead of a concrete store.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// All entities in insertion order.
    async fn list(&self) -> Result<Vec<T>, AppError>;

    async fn get(&self, id: Uuid) -> Result<T, AppError>;

    async fn create(&self, entity: T) -> Result<T, AppError>;

    /// Replaces the stored entity with the same id, keeping its position.
    async fn update(&self, entity: T) -> Result<T, AppError>;
}

/// Process-local store. Insertion order is preserved so listings are stable
/// across calls, which downstream sorting relies on for tie-breaking.
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, AppError> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<T, AppError> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", T::kind(), id)))
    }

    async fn create(&self, entity: T) -> Result<T, AppError> {
        let mut items = self.items.write().await;

        if items.iter().any(|item| item.id() == entity.id()) {
            return Err(AppError::Conflict(format!(
                "{} {} already exists",
                T::kind(),
                entity.id()
            )));
        }

        debug!("Storing new {} with ID: {}", T::kind(), entity.id());
        items.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, AppError> {
        let mut items = self.items.write().await;

        match items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::NotFound(format!(
                "{} {} not found",
                T::kind(),
                entity.id()
            ))),
        }
    }
}
