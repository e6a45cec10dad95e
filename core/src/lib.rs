//! Domain core for the todo service.
//!
//! # Overview
//! Owns the [`Todo`] entity, creation validation, the error taxonomy, and
//! the [`TodoRepository`] persistence boundary. HTTP concerns live in the
//! server crate; nothing here depends on axum.
//!
//! # Design
//! - `Todo` mutates only through `complete`, and completion is one-way.
//! - Validation runs at the handler boundary before construction. The
//!   constructor does not repeat the checks, so non-HTTP callers are
//!   responsible for running [`validate::create`] themselves.
//! - `TodoRepository` is dyn-compatible so the server can swap stores
//!   without recompiling handlers; [`MemoryRepository`] is the in-repo
//!   implementation.

pub mod error;
pub mod memory;
pub mod repository;
pub mod todo;
pub mod validate;

pub use error::{AlreadyCompleted, RepositoryError, ValidationError};
pub use memory::MemoryRepository;
pub use repository::TodoRepository;
pub use todo::Todo;
