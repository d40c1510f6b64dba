//! 会话服务
//!
//! 管理相互隔离的对话会话：每个会话持有自己的引擎、画像、任务与日志，
//! 会话之间不共享任何状态。一次只处理一轮输入，由互斥锁保证。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::{AppError, Result};
use crate::models::activity::LogEntry;
use crate::models::sentiment::Sentiment;
use crate::models::task::Task;
use crate::services::activity_log::{page_entries, total_pages};
use crate::services::dialogue::DialogueEngine;

/// 会话元信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    /// 会话唯一标识
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

/// 一轮对话的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReply {
    /// 回复文本
    pub reply: String,
    /// 情绪标签
    pub sentiment: Sentiment,
    /// 处理后的对话模式
    pub mode: String,
    /// 轮次序号（从 1 开始）
    pub turn_number: u64,
}

/// 任务更新输入
#[derive(Debug, Clone, Default)]
pub struct TaskUpdates {
    /// 标题
    pub title: Option<String>,
    /// 描述
    pub description: Option<String>,
    /// 到期时间
    pub due_date: Option<DateTime<Utc>>,
}

/// 活动日志分页结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogPage {
    /// 当前页条目（最新在前）
    pub entries: Vec<LogEntry>,
    /// 页码（从 0 开始）
    pub page: usize,
    /// 每页数量
    pub page_size: usize,
    /// 条目总数
    pub total_entries: usize,
    /// 总页数
    pub total_pages: usize,
}

/// 画像摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
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
    pub last_sentiment: Sentiment,
}

/// 会话服务 trait
#[async_trait]
pub trait SessionService: Send + Sync {
    /// 创建会话
    async fn create(&self, name: &str) -> Result<SessionInfo>;

    /// 根据 ID 获取会话
    async fn get(&self, id: &str) -> Result<Option<SessionInfo>>;

    /// 列出全部会话
    async fn list(&self) -> Result<Vec<SessionInfo>>;

    /// 删除会话（"new session" = 删除后重建）
    async fn delete(&self, id: &str) -> Result<bool>;

    /// 处理一轮输入
    async fn process_turn(&self, id: &str, text: &str) -> Result<TurnReply>;

    /// 列出会话的全部任务
    async fn list_tasks(&self, id: &str) -> Result<Vec<Task>>;

    /// 直接创建任务
    async fn create_task(
        &self,
        id: &str,
        title: &str,
        description: &str,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Task>;

    /// 更新任务
    async fn update_task(&self, id: &str, task_id: &str, updates: TaskUpdates) -> Result<Task>;

    /// 切换任务完成状态
    async fn toggle_task(&self, id: &str, task_id: &str) -> Result<Task>;

    /// 删除任务
    async fn delete_task(&self, id: &str, task_id: &str) -> Result<bool>;

    /// 读取活动日志的一页
    async fn log_page(&self, id: &str, page: usize) -> Result<LogPage>;

    /// 画像摘要
    async fn profile_summary(&self, id: &str) -> Result<ProfileSummary>;
}

/// 单个会话：元信息 + 引擎
struct SessionEntry {
    id: String,
    name: String,
    created_at: DateTime<Utc>,
    engine: Mutex<DialogueEngine>,
}

impl SessionEntry {
    fn info(&self) -> SessionInfo {
        let engine = self.engine.lock();
        SessionInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            mode: engine.mode_name().to_string(),
            turn_count: engine.turns_processed(),
        }
    }
}

/// 会话服务实现（内存存储，随进程结束丢弃）
pub struct SessionManagerImpl {
    sessions: DashMap<String, Arc<SessionEntry>>,
    engine_config: EngineConfig,
}

impl SessionManagerImpl {
    /// 创建新的服务实例
    pub fn new(engine_config: EngineConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            engine_config,
        }
    }

    fn entry(&self, id: &str) -> Result<Arc<SessionEntry>> {
        self.sessions
            .get(id)
            .map(|e| e.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))
    }
}

#[async_trait]
impl SessionService for SessionManagerImpl {
    async fn create(&self, name: &str) -> Result<SessionInfo> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Session name cannot be empty".to_string()));
        }
        if self.sessions.iter().any(|e| e.value().name == name) {
            return Err(AppError::Validation(
                "Session with this name already exists".to_string(),
            ));
        }

        let entry = Arc::new(SessionEntry {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
            engine: Mutex::new(DialogueEngine::new(self.engine_config.clone())),
        });
        let info = entry.info();
        tracing::info!("Session created: {} ({})", info.name, info.id);
        self.sessions.insert(entry.id.clone(), entry);
        Ok(info)
    }

    async fn get(&self, id: &str) -> Result<Option<SessionInfo>> {
        Ok(self.sessions.get(id).map(|e| e.value().info()))
    }

    async fn list(&self) -> Result<Vec<SessionInfo>> {
        let mut sessions: Vec<SessionInfo> =
            self.sessions.iter().map(|e| e.value().info()).collect();
        sessions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(sessions)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::info!("Session deleted: {}", id);
        }
        Ok(removed)
    }

    async fn process_turn(&self, id: &str, text: &str) -> Result<TurnReply> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Turn text cannot be empty".to_string()));
        }

        let entry = self.entry(id)?;
        let mut engine = entry.engine.lock();
        let outcome = engine.process_turn(text);
        Ok(TurnReply {
            reply: outcome.reply,
            sentiment: outcome.sentiment,
            mode: engine.mode_name().to_string(),
            turn_number: engine.turns_processed(),
        })
    }

    async fn list_tasks(&self, id: &str) -> Result<Vec<Task>> {
        let entry = self.entry(id)?;
        let engine = entry.engine.lock();
        Ok(engine.tasks().to_vec())
    }

    async fn create_task(
        &self,
        id: &str,
        title: &str,
        description: &str,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Task> {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Task title cannot be empty".to_string()));
        }
        let entry = self.entry(id)?;
        let mut engine = entry.engine.lock();
        Ok(engine.add_task(title, description, due_date))
    }

    async fn update_task(&self, id: &str, task_id: &str, updates: TaskUpdates) -> Result<Task> {
        let entry = self.entry(id)?;
        let mut engine = entry.engine.lock();
        engine
            .update_task(
                task_id,
                updates.title.as_deref(),
                updates.description.as_deref(),
                updates.due_date.map(Some),
            )
            .ok_or_else(|| AppError::NotFound(format!("Task not found: {task_id}")))
    }

    async fn toggle_task(&self, id: &str, task_id: &str) -> Result<Task> {
        let entry = self.entry(id)?;
        let mut engine = entry.engine.lock();
        engine
            .toggle_task(task_id)
            .ok_or_else(|| AppError::NotFound(format!("Task not found: {task_id}")))
    }

    async fn delete_task(&self, id: &str, task_id: &str) -> Result<bool> {
        let entry = self.entry(id)?;
        let mut engine = entry.engine.lock();
        Ok(engine.delete_task(task_id))
    }

    async fn log_page(&self, id: &str, page: usize) -> Result<LogPage> {
        let entry = self.entry(id)?;
        let engine = entry.engine.lock();
        let page_size = engine.log_page_size();
        let entries = engine.log().entries();
        let paged: Vec<LogEntry> = page_entries(&entries, page, page_size)
            .iter()
            .map(|e| (*e).clone())
            .collect();
        Ok(LogPage {
            entries: paged,
            page,
            page_size,
            total_entries: entries.len(),
            total_pages: total_pages(entries.len(), page_size),
        })
    }

    async fn profile_summary(&self, id: &str) -> Result<ProfileSummary> {
        let entry = self.entry(id)?;
        let engine = entry.engine.lock();
        let profile = engine.profile();
        Ok(ProfileSummary {
            name: profile.name.clone(),
            facts: profile.facts.clone(),
            interests: profile.interests.clone(),
            interaction_count: profile.interaction_count,
            session_started_at: profile.session_started_at,
            session_duration_secs: profile.session_duration().num_seconds(),
            pending_task_count: profile.pending_tasks().len(),
            last_sentiment: profile.last_sentiment,
        })
    }
}

/// 创建会话服务
pub fn create_session_service(engine_config: EngineConfig) -> Box<dyn SessionService> {
    Box::new(SessionManagerImpl::new(engine_config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionManagerImpl {
        SessionManagerImpl::new(EngineConfig {
            quiz_length: 10,
            log_page_size: 5,
            response_seed: Some(7),
        })
    }

    #[tokio::test]
    async fn test_create_and_get_session() {
        let service = service();
        let created = service.create("Test Session").await.unwrap();
        assert_eq!(created.mode, "normal");
        assert_eq!(created.turn_count, 0);

        let fetched = service.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Test Session");
    }

    #[tokio::test]
    async fn test_duplicate_session_name_is_rejected() {
        let service = service();
        service.create("Mentor").await.unwrap();
        assert!(service.create("Mentor").await.is_err());
    }

    #[tokio::test]
    async fn test_turns_are_isolated_between_sessions() {
        let service = service();
        let a = service.create("a").await.unwrap();
        let b = service.create("b").await.unwrap();

        service
            .process_turn(&a.id, "my name is Alice")
            .await
            .unwrap();
        let summary_a = service.profile_summary(&a.id).await.unwrap();
        let summary_b = service.profile_summary(&b.id).await.unwrap();
        assert_eq!(summary_a.name, "Alice");
        assert_eq!(summary_b.name, "Guest");
    }

    #[tokio::test]
    async fn test_empty_turn_is_rejected_at_boundary() {
        let service = service();
        let session = service.create("s").await.unwrap();
        assert!(service.process_turn(&session.id, "   ").await.is_err());
    }

    #[tokio::test]
    async fn test_turn_against_missing_session_is_not_found() {
        let service = service();
        let err = service.process_turn("nope", "hello").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_task_crud_through_service() {
        let service = service();
        let session = service.create("tasks").await.unwrap();

        let task = service
            .create_task(&session.id, "rotate passwords", "quarterly", None)
            .await
            .unwrap();
        assert!(task.due_date.is_none());

        let toggled = service.toggle_task(&session.id, &task.id).await.unwrap();
        assert!(toggled.completed);

        let updated = service
            .update_task(
                &session.id,
                &task.id,
                TaskUpdates {
                    title: Some("rotate all passwords".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "rotate all passwords");

        assert!(service.delete_task(&session.id, &task.id).await.unwrap());
        assert!(service.list_tasks(&session.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_log_page_exposes_session_events() {
        let service = service();
        let session = service.create("log").await.unwrap();
        let page = service.log_page(&session.id, 0).await.unwrap();
        assert_eq!(page.total_entries, 1);
        assert!(page.entries[0].description.contains("New session started"));
    }

    #[tokio::test]
    async fn test_delete_session_discards_state() {
        let service = service();
        let session = service.create("gone").await.unwrap();
        assert!(service.delete(&session.id).await.unwrap());
        assert!(service.get(&session.id).await.unwrap().is_none());
    }
}
