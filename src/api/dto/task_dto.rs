//! 任务 DTO
//!
//! 定义任务管理的请求和响应数据结构。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::task::Task;

/// 创建任务请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// 标题
    #[validate(length(min = 1, max = 200, message = "title must be 1..=200 characters"))]
    pub title: String,
    /// 描述
    #[serde(default)]
    pub description: Option<String>,
    /// 到期时间
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// 更新任务请求
#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateTaskRequest {
    /// 标题
    #[validate(length(min = 1, max = 200, message = "title must be 1..=200 characters"))]
    pub title: Option<String>,
    /// 描述
    pub description: Option<String>,
    /// 到期时间
    pub due_date: Option<DateTime<Utc>>,
}

/// 任务响应
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    /// 任务 ID
    pub id: String,
    /// 标题
    pub title: String,
    /// 描述
    pub description: String,
    /// 到期时间
    pub due_date: Option<DateTime<Utc>>,
    /// 是否已完成
    pub completed: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

/// 任务列表响应
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    /// 任务列表
    pub tasks: Vec<TaskResponse>,
    /// 总数
    pub total: usize,
}

/// 删除任务响应
#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    /// 任务 ID
    pub id: String,
    /// 消息
    pub message: String,
}
