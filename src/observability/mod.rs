//! 可观测性模块
//!
//! 提供简单指标、结构化日志和健康检查。

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

// ===== Simple Metrics (using atomics for zero-dep implementation) =====

/// 简单应用指标
#[derive(Debug, Default)]
pub struct AppMetrics {
    pub sessions_created_total: AtomicU64,
    pub sessions_active: AtomicUsize,
    pub turns_total: AtomicU64,
    pub tasks_created_total: AtomicU64,
    pub errors_total: AtomicU64,
}

impl AppMetrics {
    /// 记录会话创建
    pub fn record_session_created(&self) {
        self.sessions_created_total.fetch_add(1, Ordering::SeqCst);
        self.sessions_active.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录会话销毁
    pub fn record_session_deleted(&self) {
        let _ = self
            .sessions_active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    /// 记录一轮对话
    pub fn record_turn(&self) {
        self.turns_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录任务创建
    pub fn record_task_created(&self) {
        self.tasks_created_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录错误
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP sessions_created_total Total sessions created
# TYPE sessions_created_total counter
sessions_created_total {}
# HELP sessions_active Active sessions
# TYPE sessions_active gauge
sessions_active {}
# HELP turns_total Total dialogue turns processed
# TYPE turns_total counter
turns_total {}
# HELP tasks_created_total Total tasks created
# TYPE tasks_created_total counter
tasks_created_total {}
# HELP errors_total Total errors
# TYPE errors_total counter
errors_total {}
"#,
            self.sessions_created_total.load(Ordering::SeqCst),
            self.sessions_active.load(Ordering::SeqCst),
            self.turns_total.load(Ordering::SeqCst),
            self.tasks_created_total.load(Ordering::SeqCst),
            self.errors_total.load(Ordering::SeqCst),
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// 服务状态
    pub status: &'static str,
    /// 版本号
    pub version: String,
    /// 启动时间
    pub started_at: DateTime<Utc>,
    /// 已运行秒数
    pub uptime_secs: i64,
    /// 当前时间
    pub timestamp: DateTime<Utc>,
}

/// 可观测性状态
#[derive(Debug)]
pub struct ObservabilityState {
    /// 版本号
    pub version: String,
    /// 启动时间
    pub started_at: DateTime<Utc>,
    /// 应用指标
    pub metrics: Arc<AppMetrics>,
}

impl ObservabilityState {
    /// 创建新状态
    pub fn new(version: String, metrics: Arc<AppMetrics>) -> Self {
        Self {
            version,
            started_at: Utc::now(),
            metrics,
        }
    }
}

/// GET /health
async fn health_handler(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let now = Utc::now();
    Json(HealthStatus {
        status: "ok",
        version: state.version.clone(),
        started_at: state.started_at,
        uptime_secs: (now - state.started_at).num_seconds(),
        timestamp: now,
    })
}

/// GET /metrics
async fn metrics_handler(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    state.metrics.gather()
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}
