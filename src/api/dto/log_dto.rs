//! 活动日志 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::activity::LogEntry;
use crate::services::session::LogPage;

/// 日志查询参数
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LogQueryParams {
    /// 页码（从 0 开始）
    pub page: Option<usize>,
}

/// 日志条目响应
#[derive(Debug, Serialize)]
pub struct LogEntryResponse {
    /// 记录时间
    pub timestamp: DateTime<Utc>,
    /// 类别
    pub category: String,
    /// 描述
    pub description: String,
    /// 渲染后的文本 `[HH:mm:ss] [Category] Description`
    pub formatted: String,
}

impl From<&LogEntry> for LogEntryResponse {
    fn from(entry: &LogEntry) -> Self {
        Self {
            timestamp: entry.timestamp,
            category: entry.category.to_string(),
            description: entry.description.clone(),
            formatted: entry.formatted(),
        }
    }
}

/// 日志分页响应
#[derive(Debug, Serialize)]
pub struct LogPageResponse {
    /// 当前页条目（最新在前）
    pub entries: Vec<LogEntryResponse>,
    /// 页码
    pub page: usize,
    /// 每页数量
    pub page_size: usize,
    /// 条目总数
    pub total_entries: usize,
    /// 总页数
    pub total_pages: usize,
}

impl From<LogPage> for LogPageResponse {
    fn from(page: LogPage) -> Self {
        Self {
            entries: page.entries.iter().map(LogEntryResponse::from).collect(),
            page: page.page,
            page_size: page.page_size,
            total_entries: page.total_entries,
            total_pages: page.total_pages,
        }
    }
}
