//! 会话 DTO
//!
//! 定义会话相关的请求和响应数据结构。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::session::SessionInfo;

/// 创建会话请求
#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct CreateSessionRequest {
    /// 会话名称（留空时自动生成）
    #[validate(length(max = 120, message = "name too long"))]
    pub name: Option<String>,
}

/// 会话响应
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// 会话 ID
    pub id: String,
    /// 会话名称
    pub name: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 当前对话模式
    pub mode: String,
    /// 已处理的轮次数
    pub turn_count: u64,
}

impl From<SessionInfo> for SessionResponse {
    fn from(info: SessionInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            created_at: info.created_at,
            mode: info.mode,
            turn_count: info.turn_count,
        }
    }
}

/// 创建会话响应
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    /// 会话 ID
    pub id: String,
    /// 会话名称
    pub name: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 开场白
    pub welcome: String,
}

/// 会话列表响应
#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    /// 会话列表
    pub sessions: Vec<SessionResponse>,
    /// 总数
    pub total: usize,
}

/// 删除会话响应
#[derive(Debug, Serialize)]
pub struct DeleteSessionResponse {
    /// 会话 ID
    pub id: String,
    /// 消息
    pub message: String,
}
