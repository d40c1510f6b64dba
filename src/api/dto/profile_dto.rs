//! 画像 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::services::session::ProfileSummary;

/// 画像摘要响应
#[derive(Debug, Serialize)]
pub struct ProfileSummaryResponse {
    /// 姓名
    pub name: String,
    /// 个人事实
    pub facts: HashMap<String, String>,
    /// 兴趣主题
    pub interests: Vec<String>,
    /// 交互次数
    pub interaction_count: u64,
    /// 会话开始时间
    pub session_started_at: DateTime<Utc>,
    /// 会话已持续秒数
    pub session_duration_secs: i64,
    /// 未完成任务数
    pub pending_task_count: usize,
    /// 最近一次情绪
    pub last_sentiment: String,
}

impl From<ProfileSummary> for ProfileSummaryResponse {
    fn from(summary: ProfileSummary) -> Self {
        Self {
            name: summary.name,
            facts: summary.facts,
            interests: summary.interests,
            interaction_count: summary.interaction_count,
            session_started_at: summary.session_started_at,
            session_duration_secs: summary.session_duration_secs,
            pending_task_count: summary.pending_task_count,
            last_sentiment: summary.last_sentiment.to_string(),
        }
    }
}
