use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 用户 API 调用错误
    Api(ApiError),
    /// 配置错误
    Config(ConfigError),
    /// 文件操作错误
    File(FileError),
    /// 终端读写失败
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Io(e) => write!(f, "终端读写失败: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

/// API 调用错误
///
/// 界面层不区分这些情况，统一静默处理；区分只用于日志
#[derive(Debug)]
pub enum ApiError {
    /// 网络请求失败（连接、超时等）
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务端返回非 2xx 状态码
    BadResponse { endpoint: String, status: u16 },
    /// 响应体 JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { endpoint, source } => {
                write!(f, "API请求失败 ({}): {}", endpoint, source)
            }
            ApiError::BadResponse { endpoint, status } => {
                write!(f, "API返回错误响应 ({}): status={}", endpoint, status)
            }
            ApiError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. } | ApiError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ApiError::BadResponse { .. } => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::TomlParseFailed { path, source } => {
                write!(f, "TOML解析失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } | FileError::TomlParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 配置错误
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// 基础地址为空
    EmptyBaseUrl,
    /// 基础地址无法解析为 URL
    InvalidBaseUrl { value: String, reason: String },
    /// 超时时间必须大于 0
    ZeroTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBaseUrl => write!(f, "基础地址不能为空"),
            ConfigError::InvalidBaseUrl { value, reason } => {
                write!(f, "基础地址 '{}' 无效: {}", value, reason)
            }
            ConfigError::ZeroTimeout => write!(f, "请求超时时间必须大于 0 秒"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|url| url.path().to_string())
            .unwrap_or_default();
        AppError::Api(ApiError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建非 2xx 响应错误
    pub fn bad_response(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Api(ApiError::BadResponse {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建 TOML 解析错误（带路径）
    pub fn toml_parse_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
