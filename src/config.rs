//! 服务配置
//!
//! 配置来源依次为：`TIENDA_CONFIG` 指定的文件、`config.toml`、
//! `config/config.toml`、默认值。之后 `PORT` 和 `LOG_LEVEL` 环境变量覆盖对应字段。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "TIENDA_CONFIG";

/// 服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 文档配置
    pub docs: DocsConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
    /// 是否允许任意来源的跨域请求
    pub cors_permissive: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志文件目录，未设置时不写文件
    pub log_path: Option<PathBuf>,
    /// 日志文件名前缀
    pub file_prefix: String,
}

/// 文档配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub enabled: bool,
    /// 文档中显示的服务地址，默认 `http://localhost:{port}`
    pub public_url: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            timeout_seconds: 30,
            cors_permissive: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_output: true,
            log_path: None,
            file_prefix: "tienda-api".to_string(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            public_url: None,
        }
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 应用环境变量覆盖
    ///
    /// `lookup` 通常是 `std::env::var(..).ok()`，测试中可以替换。
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.http.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Validation(format!("无效的 PORT: {}", port)))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level.trim().to_lowercase();
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }

    /// 监听地址，例如 `0.0.0.0:3000`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }

    /// 对外公布的服务地址
    pub fn public_url(&self) -> String {
        self.docs
            .public_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.http.port))
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，并应用环境变量覆盖
pub fn load_config() -> Result<Config, ConfigError> {
    let mut config = match std::env::var(CONFIG_ENV) {
        Ok(path) => Config::load_from_file(path)?,
        Err(_) => load_from_default_paths()?,
    };

    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

fn load_from_default_paths() -> Result<Config, ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            return Config::load_from_file(path);
        }
    }

    Ok(Config::default())
}
