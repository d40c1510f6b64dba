use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{
        app_state::AppState,
        dto::log_dto::{LogPageResponse, LogQueryParams},
        dto::profile_dto::ProfileSummaryResponse,
        dto::turn_dto::*,
    },
    error::AppError,
};

pub async fn create_turn(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<CreateTurnRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Processing turn for session: {}", session_id);

    request.validate().map_err(|e| {
        state.metrics.record_error();
        AppError::Validation(e.to_string())
    })?;
    if request.text.trim().is_empty() {
        state.metrics.record_error();
        return Err(AppError::Validation("Text cannot be empty".to_string()));
    }

    let reply = state
        .session_service
        .process_turn(&session_id, &request.text)
        .await?;
    state.metrics.record_turn();

    Ok(Json(TurnResponse::from(reply)))
}

pub async fn get_log_page(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(params): Query<LogQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Reading activity log for session: {}", session_id);

    let page = params.page.unwrap_or(0);
    let log_page = state.session_service.log_page(&session_id, page).await?;

    Ok(Json(LogPageResponse::from(log_page)))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Reading profile summary for session: {}", session_id);

    let summary = state.session_service.profile_summary(&session_id).await?;

    Ok(Json(ProfileSummaryResponse::from(summary)))
}
