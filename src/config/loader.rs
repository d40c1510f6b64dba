use crate::config::config::{AppConfig, EngineConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 搜索路径：
    /// 1. ./config.yaml
    /// 2. 环境变量
    pub fn load() -> Result<AppConfig, figment::Error> {
        let figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config.yaml"))
            .merge(Env::prefixed("MENTOR_").split("_").global());

        figment.extract()
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("MENTOR_").split("_").global());

        figment.extract()
    }

    /// 加载对话引擎配置
    pub fn load_engine_config() -> Result<EngineConfig, figment::Error> {
        let figment = Figment::from(Serialized::defaults(EngineConfig::default()))
            .merge(Toml::file("config.yaml"))
            .merge(Env::prefixed("MENTOR_ENGINE_").split("_").global());

        figment.extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.engine.quiz_length == 0 {
            return Err(ConfigValidationError::InvalidQuizLength);
        }

        if config.engine.log_page_size == 0 {
            return Err(ConfigValidationError::InvalidPageSize);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("测验题目数量无效，必须大于 0")]
    InvalidQuizLength,

    #[error("日志分页大小无效，必须大于 0")]
    InvalidPageSize,

    #[error("配置路径无效: {0}")]
    InvalidPath(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.yaml")
}

/// 检查配置文件是否存在
pub fn config_exists() -> bool {
    default_config_path().exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_quiz_length() {
        let mut config = AppConfig::default();
        config.engine.quiz_length = 0;
        assert!(ConfigLoader::validate(&config).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = AppConfig::default();
        assert!(ConfigLoader::validate(&config).is_ok());
    }
}
