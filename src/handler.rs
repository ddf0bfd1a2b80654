use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{error::AppError, model::Todo, schema::CreateTodoSchema, AppState};

// Handler for getting all Todo items
pub async fn get_todos(State(data): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = data.store.list_all().await?;
    Ok(Json(todos))
}

// Handler for creating a new Todo
pub async fn create_todo(
    State(data): State<Arc<AppState>>,
    body: Result<Json<CreateTodoSchema>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Nothing reaches storage unless the body decodes
    let Json(body) = body?;

    let todo = data.store.insert_one(body).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

// Handler for deleting a Todo by ID
pub async fn delete_todo(
    State(data): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    data.store.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
