//! 活动日志数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 活动类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    /// 普通对话
    Chat,
    /// 任务/提醒
    Task,
    /// 测验
    Quiz,
    /// 系统事件
    System,
}

impl ActivityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Chat => "Chat",
            ActivityCategory::Task => "Task",
            ActivityCategory::Quiz => "Quiz",
            ActivityCategory::System => "System",
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 日志条目
///
/// 创建后不可变，只追加不修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// 记录时间
    pub timestamp: DateTime<Utc>,
    /// 活动类别
    pub category: ActivityCategory,
    /// 描述
    pub description: String,
}

impl LogEntry {
    /// 创建新条目（取当前时间）
    pub fn new(category: ActivityCategory, description: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            category,
            description: description.to_string(),
        }
    }

    /// 渲染为 `[HH:mm:ss] [Category] Description`
    pub fn formatted(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.timestamp.format("%H:%M:%S"),
            self.category,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_entry_shape() {
        let entry = LogEntry::new(ActivityCategory::System, "New session started.");
        let rendered = entry.formatted();
        assert!(rendered.contains("[System] New session started."));
        assert!(rendered.starts_with('['));
    }
}
