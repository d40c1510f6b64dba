use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{app_state::AppState, dto::task_dto::*},
    error::AppError,
    services::session::TaskUpdates,
};

pub async fn list_tasks(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Listing tasks for session: {}", session_id);

    let tasks = state.session_service.list_tasks(&session_id).await?;
    let total = tasks.len();
    let response = TaskListResponse {
        tasks: tasks.into_iter().map(TaskResponse::from).collect(),
        total,
    };

    Ok(Json(response))
}

pub async fn create_task(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating task for session: {}", session_id);

    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let task = state
        .session_service
        .create_task(
            &session_id,
            &request.title,
            request.description.as_deref().unwrap_or(""),
            request.due_date,
        )
        .await?;
    state.metrics.record_task_created();

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path((session_id, task_id)): Path<(String, String)>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating task {} for session: {}", task_id, session_id);

    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updates = TaskUpdates {
        title: request.title,
        description: request.description,
        due_date: request.due_date,
    };
    let task = state
        .session_service
        .update_task(&session_id, &task_id, updates)
        .await?;

    Ok(Json(TaskResponse::from(task)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path((session_id, task_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Toggling task {} for session: {}", task_id, session_id);

    let task = state
        .session_service
        .toggle_task(&session_id, &task_id)
        .await?;

    Ok(Json(TaskResponse::from(task)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path((session_id, task_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting task {} for session: {}", task_id, session_id);

    let removed = state
        .session_service
        .delete_task(&session_id, &task_id)
        .await?;
    if !removed {
        return Err(AppError::NotFound(format!("Task not found: {task_id}")));
    }

    let response = DeleteTaskResponse {
        id: task_id,
        message: "Task deleted successfully".to_string(),
    };

    Ok(Json(response))
}
