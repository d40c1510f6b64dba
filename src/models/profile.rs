//! 用户画像数据模型
//!
//! 存储单次会话内用户的姓名、个人事实、兴趣主题和任务列表。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::sentiment::Sentiment;
use crate::models::task::Task;

/// 用户画像
///
/// 生命周期为一次会话；"new session" 时整体丢弃重建。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// 姓名
    pub name: String,

    /// === 个人事实 ===
    /// 键为规范化小写，同键后写覆盖
    pub facts: HashMap<String, String>,

    /// 兴趣主题（规范化、去重、保持加入顺序）
    pub interests: Vec<String>,

    /// === 任务 ===
    /// 用户的提醒任务
    pub tasks: Vec<Task>,

    /// === 元数据 ===
    /// 交互次数（单调递增）
    pub interaction_count: u64,

    /// 会话开始时间（不可变）
    pub session_started_at: DateTime<Utc>,

    /// 最近一次检测到的情绪（每轮覆盖）
    pub last_sentiment: Sentiment,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl UserProfile {
    /// 创建新画像
    pub fn new() -> Self {
        Self {
            name: "Guest".to_string(),
            facts: HashMap::new(),
            interests: Vec::new(),
            tasks: Vec::new(),
            interaction_count: 0,
            session_started_at: Utc::now(),
            last_sentiment: Sentiment::Neutral,
        }
    }

    /// 记录一条个人事实（键转小写，后写覆盖）
    pub fn remember(&mut self, key: &str, value: &str) {
        self.facts.insert(key.to_lowercase(), value.to_string());
    }

    /// 读取个人事实
    pub fn recall(&self, key: &str) -> Option<&str> {
        self.facts.get(&key.to_lowercase()).map(|s| s.as_str())
    }

    /// 加入兴趣主题（小写去重）
    pub fn add_interest(&mut self, topic: &str) {
        let normalized = topic.to_lowercase();
        if !self.interests.contains(&normalized) {
            self.interests.push(normalized);
        }
    }

    /// 是否已有某兴趣
    pub fn has_interest(&self, topic: &str) -> bool {
        let needle = topic.to_lowercase();
        self.interests.iter().any(|i| i.contains(&needle))
    }

    /// 递增交互计数
    pub fn record_interaction(&mut self) {
        self.interaction_count += 1;
    }

    /// 未完成任务，按到期时间升序，无到期时间的排在最后
    pub fn pending_tasks(&self) -> Vec<&Task> {
        let mut pending: Vec<&Task> = self.tasks.iter().filter(|t| !t.completed).collect();
        pending.sort_by_key(|t| (t.due_date.is_none(), t.due_date));
        pending
    }

    /// 会话已持续时间
    pub fn session_duration(&self) -> chrono::Duration {
        Utc::now() - self.session_started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_facts_are_case_normalized_and_last_write_wins() {
        let mut profile = UserProfile::new();
        profile.remember("Job", "developer");
        profile.remember("JOB", "analyst");
        assert_eq!(profile.recall("job"), Some("analyst"));
    }

    #[test]
    fn test_interests_deduplicate() {
        let mut profile = UserProfile::new();
        profile.add_interest("Phishing");
        profile.add_interest("phishing");
        assert_eq!(profile.interests.len(), 1);
        assert!(profile.has_interest("PHISHING"));
    }

    #[test]
    fn test_pending_tasks_sort_dated_first_ascending() {
        let mut profile = UserProfile::new();
        let later = Utc.with_ymd_and_hms(2026, 6, 2, 9, 0, 0).unwrap();
        let sooner = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();

        profile.tasks.push(Task::new("undated", ""));
        profile.tasks.push(Task::new("later", "").with_due_date(later));
        let mut done = Task::new("done", "").with_due_date(sooner);
        done.completed = true;
        profile.tasks.push(done);
        profile.tasks.push(Task::new("sooner", "").with_due_date(sooner));

        let titles: Vec<&str> = profile
            .pending_tasks()
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["sooner", "later", "undated"]);
    }
}
