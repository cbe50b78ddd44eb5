//! Handlers for the `/todos` resource.
//!
//! Path and body rejections are taken as `Result`s so they surface through
//! [`AppError`] with the same `{ "detail" }` shape as every other failure.
//! All input checks run before the store is touched.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_core::validation::{into_core_error, require_any_field};
use todo_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use todo_db::repositories::TodoRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Todo", id })
}

/// GET /todos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = TodoRepo::list(&state.pool).await?;
    tracing::debug!(count = todos.len(), "Listed todos");
    Ok(Json(todos))
}

/// GET /todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Todo>> {
    let Path(id) = id?;
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(todo))
}

/// POST /todos
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let Json(input) = payload?;
    input.validate().map_err(|e| into_core_error(&e))?;

    let todo = TodoRepo::create(&state.pool, &input).await?;
    tracing::info!(id = todo.id, "Created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PATCH /todos/{id}
///
/// Sparse update: only the supplied fields change. An empty body is rejected
/// with 400 even when the id does not exist.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> AppResult<Json<Todo>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    require_any_field(input.has_changes())?;
    input.validate().map_err(|e| into_core_error(&e))?;

    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        id,
        content_changed = input.content.is_some(),
        completed = ?input.completed,
        "Updated todo"
    );
    Ok(Json(todo))
}

/// DELETE /todos/{id}
///
/// Existence is judged by the affected-row count of the delete itself.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    if TodoRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Deleted todo");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
