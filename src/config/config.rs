use serde::{Deserialize, Serialize};

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 请求超时（秒）
    pub request_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            request_timeout: 30,
        }
    }
}

/// 对话引擎配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 每次测验抽取的题目数量
    pub quiz_length: usize,
    /// 活动日志分页大小
    pub log_page_size: usize,
    /// 随机源种子（固定后回复选择与抽题可复现）
    pub response_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quiz_length: 10,
            log_page_size: 5,
            response_seed: None,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            structured: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 对话引擎配置
    pub engine: EngineConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig::default(),
            engine: EngineConfig {
                quiz_length: 10,
                log_page_size: 5,
                response_seed: Some(7),
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
            },
            app_name: "mentor".into(),
            environment: "development".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_runnable() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.engine.quiz_length, 10);
        assert_eq!(config.engine.log_page_size, 5);
        assert!(config.engine.response_seed.is_none());
    }

    #[test]
    fn test_development_config_is_seeded() {
        let config = AppConfig::development();
        assert_eq!(config.engine.response_seed, Some(7));
    }
}
