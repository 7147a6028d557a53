use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，示例：SHORTENER__SERVER__PORT=9999
pub const ENV_PREFIX: &str = "SHORTENER";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 所有默认值与无配置启动时的行为一致：
/// 监听 `0.0.0.0:8080`，短链前缀 `http://localhost:8080/`。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML 文件 > 默认值
    ///
    /// 显式传入的路径必须存在；未传入时 `config.toml` 可选。
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.server.workers == 0 {
            return Err(crate::errors::ShortenerError::configuration(
                "server.workers must be at least 1",
            ));
        }
        if self.logging.max_backups == 0 {
            return Err(crate::errors::ShortenerError::configuration(
                "logging.max_backups must be at least 1",
            ));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(crate::errors::ShortenerError::configuration(format!(
                "Invalid logging.format: '{}'. Valid: text, json",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// 短链前缀，响应体为 `base_url + key`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            base_url: default_base_url(),
            workers: default_workers(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_reference_service() {
        let config = StaticConfig::default();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.server.base_url, "http://localhost:8080/");
        assert!(config.server.workers >= 1);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9090\nbase_url = \"https://sho.rt/\"\n\n[logging]\nformat = \"json\"\n",
        )
        .expect("Failed to write config");

        let config =
            StaticConfig::load(Some(path.to_str().expect("utf-8 path"))).expect("load config");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.base_url, "https://sho.rt/");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("absent.toml");

        let result = StaticConfig::load(Some(path.to_str().expect("utf-8 path")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[logging]\nformat = \"xml\"\n").expect("Failed to write config");

        let err = StaticConfig::load(Some(path.to_str().expect("utf-8 path")))
            .expect_err("xml format must be rejected");
        assert!(err.message().contains("logging.format"));
    }

    #[test]
    fn test_zero_max_backups_rejected() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("backups.toml");
        std::fs::write(&path, "[logging]\nmax_backups = 0\n").expect("Failed to write config");

        let err = StaticConfig::load(Some(path.to_str().expect("utf-8 path")))
            .expect_err("zero backups must be rejected");
        assert!(err.message().contains("logging.max_backups"));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("workers.toml");
        std::fs::write(&path, "[server]\nworkers = 0\n").expect("Failed to write config");

        let err = StaticConfig::load(Some(path.to_str().expect("utf-8 path")))
            .expect_err("zero workers must be rejected");
        assert!(err.message().contains("server.workers"));
    }

    #[test]
    fn test_sample_config_round_trips_through_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("sample.toml");

        let sample = StaticConfig::generate_sample_config().expect("sample config");
        assert!(sample.contains("[server]"));
        assert!(sample.contains("base_url"));

        StaticConfig::default()
            .save_to_file(&path)
            .expect("save sample config");
        let loaded =
            StaticConfig::load(Some(path.to_str().expect("utf-8 path"))).expect("reload sample");
        assert_eq!(loaded.server.port, 8080);
    }
}
