//! 情绪标签数据模型
//!
//! 粗粒度的情绪估计结果，仅用于回复措辞和界面呈现。

use serde::{Deserialize, Serialize};

/// 情绪标签
///
/// 前六种由关键词计数得出；summary/suggestion/error 仅由系统输出使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// 担忧
    Worried,
    /// 好奇
    Curious,
    /// 沮丧
    Frustrated,
    /// 高兴
    Happy,
    /// 自信
    Confident,
    /// 不知所措
    Overwhelmed,
    /// 中性
    #[default]
    Neutral,
    /// 总结（仅系统输出）
    Summary,
    /// 建议（仅系统输出）
    Suggestion,
    /// 错误提示（仅系统输出）
    Error,
}

impl Sentiment {
    /// 标签的字符串形式
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Worried => "worried",
            Sentiment::Curious => "curious",
            Sentiment::Frustrated => "frustrated",
            Sentiment::Happy => "happy",
            Sentiment::Confident => "confident",
            Sentiment::Overwhelmed => "overwhelmed",
            Sentiment::Neutral => "neutral",
            Sentiment::Summary => "summary",
            Sentiment::Suggestion => "suggestion",
            Sentiment::Error => "error",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
