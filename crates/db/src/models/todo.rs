//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::DbId;
use validator::Validate;

/// A todo row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub content: String,
    pub completed: bool,
}

/// DTO for creating a new todo. New todos always start incomplete.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodo {
    #[validate(custom(function = "todo_core::validation::validate_content"))]
    pub content: String,
}

/// DTO for a sparse update. `None` means "leave the column alone";
/// an explicit JSON `null` is treated the same as an omitted field.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodo {
    #[serde(default)]
    #[validate(custom(function = "todo_core::validation::validate_content"))]
    pub content: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// Returns `true` if at least one field was supplied.
    pub fn has_changes(&self) -> bool {
        self.content.is_some() || self.completed.is_some()
    }
}
