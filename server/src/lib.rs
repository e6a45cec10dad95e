//! HTTP surface for the todo service.
//!
//! # Overview
//! Routes under `/todos` and the handlers behind them. Handlers validate
//! input, drive the [`Todo`] entity, and reach storage only through the
//! [`TodoRepository`] trait; `app()` wires the in-memory store and
//! [`app_with_repository`] accepts any other implementation.
//!
//! # Design
//! - One task per request; handlers suspend only at repository calls, and a
//!   dropped connection drops the handler future, cancelling any in-flight
//!   call.
//! - Complete re-reads the todo immediately before writing it back. The
//!   read and the write are separate repository calls, so two concurrent
//!   completes for the same id can both observe `is_completed == false`;
//!   strict consistency would need compare-and-swap at the repository
//!   boundary.
//! - Validation and conflict messages are returned as plain-text bodies and
//!   are part of the API contract.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

use todo_core::{
    validate, AlreadyCompleted, MemoryRepository, RepositoryError, Todo, TodoRepository,
    ValidationError,
};

/// Shared handler state: the one repository instance behind the whole app.
#[derive(Clone)]
pub struct AppState {
    repo: Arc<dyn TodoRepository>,
}

/// Builds the router over a fresh in-memory store.
pub fn app() -> Router {
    app_with_repository(Arc::new(MemoryRepository::new()))
}

/// Builds the router over any repository implementation.
pub fn app_with_repository(repo: Arc<dyn TodoRepository>) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).delete(delete_todo))
        .route("/todos/{id}/complete", post(complete_todo))
        .with_state(AppState { repo })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Request payload for creating a new todo.
///
/// Fields default to empty so an omitted field hits the same validation
/// path (and message) as an explicitly empty one.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// List item shape returned by `GET /todos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoListItem {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            is_completed: todo.is_completed,
            updated_at: todo.updated_at,
        }
    }
}

/// Handler failures mapped to HTTP responses.
enum ApiError {
    Validation(ValidationError),
    NotFound,
    Conflict(AlreadyCompleted),
    Repository(RepositoryError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<AlreadyCompleted> for ApiError {
    fn from(err: AlreadyCompleted) -> Self {
        ApiError::Conflict(err)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::Repository(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()).into_response(),
            ApiError::Repository(err) => {
                tracing::error!(error = %err, "repository failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoListItem>>, ApiError> {
    let todos = state.repo.list().await?;
    Ok(Json(todos.into_iter().map(TodoListItem::from).collect()))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.repo.get_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> Result<impl IntoResponse, ApiError> {
    validate::create(&input.title, &input.description)?;

    let todo = Todo::new(input.title, input.description);
    state.repo.add(todo.clone()).await?;
    tracing::debug!(id = %todo.id, "created todo");

    let location = format!("/todos/{}", todo.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    ))
}

async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut todo = state.repo.get_by_id(id).await?.ok_or(ApiError::NotFound)?;
    todo.complete()?;
    state.repo.update(todo).await?;
    Ok(StatusCode::OK)
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.repo.delete(id).await?;
    Ok(StatusCode::OK)
}
