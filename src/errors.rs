use std::fmt;

#[derive(Debug, Clone)]
pub enum ShortenerError {
    Configuration(String),
    ServerBind(String),
    BodyRead(String),
    FileOperation(String),
}

impl ShortenerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortenerError::Configuration(_) => "E001",
            ShortenerError::ServerBind(_) => "E002",
            ShortenerError::BodyRead(_) => "E003",
            ShortenerError::FileOperation(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortenerError::Configuration(_) => "Configuration Error",
            ShortenerError::ServerBind(_) => "Server Bind Error",
            ShortenerError::BodyRead(_) => "Request Body Error",
            ShortenerError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortenerError::Configuration(msg) => msg,
            ShortenerError::ServerBind(msg) => msg,
            ShortenerError::BodyRead(msg) => msg,
            ShortenerError::FileOperation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortenerError {}

// 便捷的构造函数
impl ShortenerError {
    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Configuration(msg.into())
    }

    pub fn server_bind<T: Into<String>>(msg: T) -> Self {
        ShortenerError::ServerBind(msg.into())
    }

    pub fn body_read<T: Into<String>>(msg: T) -> Self {
        ShortenerError::BodyRead(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::FileOperation(msg.into())
    }
}

impl From<std::io::Error> for ShortenerError {
    fn from(err: std::io::Error) -> Self {
        ShortenerError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for ShortenerError {
    fn from(err: config::ConfigError) -> Self {
        ShortenerError::Configuration(err.to_string())
    }
}

impl From<toml::ser::Error> for ShortenerError {
    fn from(err: toml::ser::Error) -> Self {
        ShortenerError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            ShortenerError::configuration("a"),
            ShortenerError::server_bind("b"),
            ShortenerError::body_read("c"),
            ShortenerError::file_operation("d"),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_uses_simple_format() {
        let error = ShortenerError::server_bind("address in use");
        assert_eq!(error.to_string(), "Server Bind Error: address in use");
        assert_eq!(error.message(), "address in use");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: ShortenerError = io.into();
        assert!(matches!(error, ShortenerError::FileOperation(_)));
        assert!(error.message().contains("missing"));
    }

    #[test]
    fn test_format_colored_contains_parts() {
        let error = ShortenerError::configuration("bad port");
        let formatted = error.format_colored();
        assert!(formatted.contains("E001"));
        assert!(formatted.contains("bad port"));
    }
}
