/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each repository call checks out its own
    /// connection for the duration of one operation.
    pub pool: todo_db::DbPool,
}
