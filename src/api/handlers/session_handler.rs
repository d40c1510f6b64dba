use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{app_state::AppState, dto::session_dto::*},
    error::AppError,
    services::dialogue::DialogueEngine,
};

pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let name = match request.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => format!("session-{}", chrono::Utc::now().format("%Y%m%d%H%M%S%3f")),
    };
    debug!("Creating session: {}", name);

    let info = state.session_service.create(&name).await?;
    state.metrics.record_session_created();

    let response = CreateSessionResponse {
        id: info.id,
        name: info.name,
        created_at: info.created_at,
        welcome: DialogueEngine::welcome_message().to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Listing sessions");

    let sessions = state.session_service.list().await?;
    let total = sessions.len();
    let response = SessionListResponse {
        sessions: sessions.into_iter().map(SessionResponse::from).collect(),
        total,
    };

    Ok(Json(response))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting session: {}", session_id);

    let info = state
        .session_service
        .get(&session_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {session_id}")))?;

    Ok(Json(SessionResponse::from(info)))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting session: {}", session_id);

    let removed = state.session_service.delete(&session_id).await?;
    if !removed {
        return Err(AppError::NotFound(format!("Session not found: {session_id}")));
    }
    state.metrics.record_session_deleted();

    let response = DeleteSessionResponse {
        id: session_id,
        message: "Session deleted successfully".to_string(),
    };

    Ok(Json(response))
}
