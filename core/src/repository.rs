//! Persistence boundary for todos.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::todo::Todo;

/// Abstract todo store.
///
/// Handlers only see this trait, so the backing store is swappable without
/// touching them. All methods are async and suspend only for backend I/O;
/// dropping the returned future cancels the call, which is how request
/// cancellation reaches the store.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Every stored todo, in insertion order where the store keeps one.
    async fn list(&self) -> Result<Vec<Todo>, RepositoryError>;

    /// The todo with the given id, or `None` when absent.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Todo>, RepositoryError>;

    /// Persists a freshly created todo. Fails with
    /// [`RepositoryError::Duplicate`] if the id is already stored.
    async fn add(&self, todo: Todo) -> Result<(), RepositoryError>;

    /// Replaces the stored todo with the same id. Fails with
    /// [`RepositoryError::Missing`] if there is none.
    async fn update(&self, todo: Todo) -> Result<(), RepositoryError>;

    /// Removes the todo with the given id. Removing an absent id succeeds.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
