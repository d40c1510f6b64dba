//! 提醒任务数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 提醒任务
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// 任务唯一标识
    pub id: String,

    /// 标题
    pub title: String,

    /// 描述
    pub description: String,

    /// 到期时间（None 表示未设置提醒）
    pub due_date: Option<DateTime<Utc>>,

    /// 是否已完成
    pub completed: bool,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// 创建新任务（无提醒时间）
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            due_date: None,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// 设置到期时间
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// 切换完成状态
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// 到期时间的显示形式，未设置时为 "N/A"
    pub fn due_display(&self) -> String {
        match self.due_date {
            Some(due) => due.format("%Y-%m-%d %H:%M").to_string(),
            None => "N/A".to_string(),
        }
    }

    /// 渲染为任务列表行 `• Title (Due: …)`
    pub fn display_line(&self) -> String {
        format!("• {} (Due: {})", self.title, self.due_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_task_without_due_date_displays_na() {
        let task = Task::new("update router firmware", "Created via chat.");
        assert_eq!(task.display_line(), "• update router firmware (Due: N/A)");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_with_due_date_displays_timestamp() {
        let due = Utc.with_ymd_and_hms(2026, 3, 14, 15, 30, 0).unwrap();
        let task = Task::new("change passwords", "Created via chat.").with_due_date(due);
        assert_eq!(
            task.display_line(),
            "• change passwords (Due: 2026-03-14 15:30)"
        );
    }

    #[test]
    fn test_toggle_completed_flips_flag() {
        let mut task = Task::new("enable 2fa", "");
        task.toggle_completed();
        assert!(task.completed);
        task.toggle_completed();
        assert!(!task.completed);
    }
}
