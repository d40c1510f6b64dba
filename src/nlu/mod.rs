//! 自然语言理解模块
//!
//! 基于有序规则表的意图分类、个人事实抽取、情绪估计和自然语言时间解析。
//! 全部为确定性规则，无统计模型。

pub mod classifier;
pub mod datetime;
pub mod facts;
pub mod sentiment;

pub use classifier::IntentClassifier;
pub use datetime::parse_natural;
pub use facts::FactExtractor;
pub use sentiment::SentimentAnalyzer;
