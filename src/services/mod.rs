//! 服务模块

pub mod activity_log;
pub mod dialogue;
pub mod quiz;
pub mod responses;
pub mod session;

pub use activity_log::{page_entries, total_pages, ActivityLog};
pub use dialogue::{DialogueEngine, Mode, TurnOutcome};
pub use quiz::{AnswerOutcome, AnswerResult, QuizSession};
pub use responses::ResponseSelector;
pub use session::{
    create_session_service, LogPage, ProfileSummary, SessionInfo, SessionManagerImpl,
    SessionService, TaskUpdates, TurnReply,
};
