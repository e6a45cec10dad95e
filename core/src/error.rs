//! Error types for the todo domain.
//!
//! # Design
//! Validation failures and the completion conflict carry their exact
//! user-facing message as the `Display` output; handlers return those
//! strings verbatim in response bodies, so they are part of the API
//! contract. Repository failures stay in a separate type so the HTTP layer
//! can map them to a generic 5xx without leaking backend detail.

use thiserror::Error;
use uuid::Uuid;

/// A creation input rejected by [`crate::validate::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The title is required.")]
    TitleRequired,

    #[error("The title must be between 5 and 20 characters.")]
    TitleLength,

    #[error("The description is required.")]
    DescriptionRequired,

    #[error("The description must be less than 100 characters.")]
    DescriptionTooLong,
}

/// Returned by [`crate::todo::Todo::complete`] when the todo is already
/// completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The todo {id} is already completed.")]
pub struct AlreadyCompleted {
    pub id: Uuid,
}

/// Failures surfaced by a [`crate::repository::TodoRepository`]
/// implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// `add` was called with an id already present in the store. Should not
    /// occur with generated v4 ids.
    #[error("todo {0} already exists")]
    Duplicate(Uuid),

    /// `update` was called with an id absent from the store.
    #[error("todo {0} does not exist")]
    Missing(Uuid),

    /// The backing store itself failed.
    #[error("storage backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}
