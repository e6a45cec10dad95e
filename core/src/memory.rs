//! In-memory todo store.
//!
//! # Design
//! Backs the default server wiring and the test suites. Todos live in a
//! `Vec` behind an async `RwLock`, so `list` comes back in insertion order
//! and readers don't block each other. Linear scans are fine at this scale;
//! a store with an index belongs behind the same trait, not here.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::repository::TodoRepository;
use crate::todo::Todo;

/// Vec-backed store behind an async lock.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for MemoryRepository {
    async fn list(&self) -> Result<Vec<Todo>, RepositoryError> {
        Ok(self.todos.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Todo>, RepositoryError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|todo| todo.id == id).cloned())
    }

    async fn add(&self, todo: Todo) -> Result<(), RepositoryError> {
        let mut todos = self.todos.write().await;
        if todos.iter().any(|stored| stored.id == todo.id) {
            return Err(RepositoryError::Duplicate(todo.id));
        }
        todos.push(todo);
        Ok(())
    }

    async fn update(&self, todo: Todo) -> Result<(), RepositoryError> {
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|stored| stored.id == todo.id) {
            Some(stored) => {
                *stored = todo;
                Ok(())
            }
            None => Err(RepositoryError::Missing(todo.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.todos.write().await.retain(|todo| todo.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str) -> Todo {
        Todo::new(title.to_string(), "something to do".to_string())
    }

    #[tokio::test]
    async fn add_then_get_roundtrips() {
        let repo = MemoryRepository::new();
        let todo = todo("Buy milk");
        repo.add(todo.clone()).await.unwrap();

        let fetched = repo.get_by_id(todo.id).await.unwrap();
        assert_eq!(fetched, Some(todo));
    }

    #[tokio::test]
    async fn get_absent_id_is_none() {
        let repo = MemoryRepository::new();
        assert_eq!(repo.get_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = MemoryRepository::new();
        let first = todo("First task");
        let second = todo("Second task");
        repo.add(first.clone()).await.unwrap();
        repo.add(second.clone()).await.unwrap();

        let todos = repo.list().await.unwrap();
        assert_eq!(todos, vec![first, second]);
    }

    #[tokio::test]
    async fn add_duplicate_id_fails() {
        let repo = MemoryRepository::new();
        let todo = todo("Buy milk");
        repo.add(todo.clone()).await.unwrap();

        let err = repo.add(todo.clone()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(id) if id == todo.id));
    }

    #[tokio::test]
    async fn update_replaces_stored_todo() {
        let repo = MemoryRepository::new();
        let mut todo = todo("Buy milk");
        repo.add(todo.clone()).await.unwrap();

        todo.complete().unwrap();
        repo.update(todo.clone()).await.unwrap();

        let fetched = repo.get_by_id(todo.id).await.unwrap().unwrap();
        assert!(fetched.is_completed);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_absent_id_fails() {
        let repo = MemoryRepository::new();
        let todo = todo("Buy milk");
        let err = repo.update(todo.clone()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Missing(id) if id == todo.id));
    }

    #[tokio::test]
    async fn delete_removes_todo() {
        let repo = MemoryRepository::new();
        let todo = todo("Buy milk");
        repo.add(todo.clone()).await.unwrap();

        repo.delete(todo.id).await.unwrap();
        assert_eq!(repo.get_by_id(todo.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_absent_id_succeeds() {
        let repo = MemoryRepository::new();
        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }
}
