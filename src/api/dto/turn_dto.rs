//! 轮次 DTO
//!
//! 定义对话轮次的请求和响应数据结构。

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::session::TurnReply;

/// 提交轮次请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTurnRequest {
    /// 用户输入（一行自由文本）
    #[validate(length(min = 1, max = 2000, message = "text must be 1..=2000 characters"))]
    pub text: String,
}

/// 轮次响应
#[derive(Debug, Serialize)]
pub struct TurnResponse {
    /// 回复文本
    pub reply: String,
    /// 情绪标签
    pub sentiment: String,
    /// 处理后的对话模式
    pub mode: String,
    /// 轮次序号
    pub turn_number: u64,
}

impl From<TurnReply> for TurnResponse {
    fn from(reply: TurnReply) -> Self {
        Self {
            reply: reply.reply,
            sentiment: reply.sentiment.to_string(),
            mode: reply.mode,
            turn_number: reply.turn_number,
        }
    }
}
