//! 意图数据模型
//!
//! 意图分类器的输出：意图名称、可选主题和提取到的实体。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 意图名称（固定集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    /// 查询安全主题信息
    GetInfo,
    /// 创建任务/提醒
    CreateTask,
    /// 列出任务
    ListTasks,
    /// 开始测验
    StartQuiz,
    /// 停止测验
    StopQuiz,
    /// 查看活动日志
    ViewLog,
    /// 查看日志下一页
    ViewMoreLog,
    /// 回忆已存储的个人信息
    RecallMemory,
    /// 用户告知个人信息
    AcknowledgeInfo,
    /// 问候
    Greeting,
    /// 致谢
    ThankYou,
    /// 帮助
    Help,
    /// 确认
    Confirm,
    /// 否认
    Deny,
    /// 未识别
    Fallback,
}

/// 安全主题（GetInfo 专用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Password,
    TwoFactorAuth,
    Phishing,
    Malware,
    Vpn,
    WifiSecurity,
    DataBreach,
    Encryption,
}

impl Topic {
    /// 主题的展示名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Password => "Password",
            Topic::TwoFactorAuth => "Two-Factor Authentication",
            Topic::Phishing => "Phishing",
            Topic::Malware => "Malware",
            Topic::Vpn => "VPN",
            Topic::WifiSecurity => "Wi-Fi Security",
            Topic::DataBreach => "Data Breach",
            Topic::Encryption => "Encryption",
        }
    }

    /// 存入兴趣列表时使用的规范化名称
    pub fn normalized(&self) -> &'static str {
        match self {
            Topic::Password => "password",
            Topic::TwoFactorAuth => "two-factor auth",
            Topic::Phishing => "phishing",
            Topic::Malware => "malware",
            Topic::Vpn => "vpn",
            Topic::WifiSecurity => "wifi security",
            Topic::DataBreach => "data breach",
            Topic::Encryption => "encryption",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 分类结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// 意图名称
    pub kind: IntentKind,
    /// 主题（仅 GetInfo）
    pub topic: Option<Topic>,
    /// 提取到的实体（如 task / time），值保留原文大小写
    pub entities: HashMap<String, String>,
}

impl Intent {
    /// 创建无实体的意图
    pub fn of(kind: IntentKind) -> Self {
        Self {
            kind,
            topic: None,
            entities: HashMap::new(),
        }
    }

    /// 创建带主题的 GetInfo 意图
    pub fn get_info(topic: Topic) -> Self {
        Self {
            kind: IntentKind::GetInfo,
            topic: Some(topic),
            entities: HashMap::new(),
        }
    }

    /// 附加一个实体
    pub fn with_entity(mut self, name: &str, value: &str) -> Self {
        self.entities.insert(name.to_string(), value.to_string());
        self
    }

    /// 读取实体值
    pub fn entity(&self, name: &str) -> Option<&str> {
        self.entities.get(name).map(|s| s.as_str())
    }
}
