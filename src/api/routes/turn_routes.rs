//! Turn Routes
//!
//! 定义对话轮次、日志与画像的 API 路由。

use crate::api::handlers::turn_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// 创建轮次路由器
pub fn create_turn_router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:id/turns", post(create_turn))
        .route("/sessions/:id/log", get(get_log_page))
        .route("/sessions/:id/profile", get(get_profile))
}
