//! Task Routes
//!
//! 定义任务管理的 API 路由。

use crate::api::handlers::task_handler::*;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::app_state::AppState;

/// 创建任务路由器
pub fn create_task_router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:id/tasks", get(list_tasks))
        .route("/sessions/:id/tasks", post(create_task))
        .route("/sessions/:id/tasks/:task_id", put(update_task))
        .route("/sessions/:id/tasks/:task_id", delete(delete_task))
        .route("/sessions/:id/tasks/:task_id/toggle", post(toggle_task))
}
