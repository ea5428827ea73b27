use core::fmt;
use std::env;
use std::time::Duration;

/// 未配置时使用的后端地址
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// 覆盖后端地址的环境变量
pub const API_URL_ENV: &str = "SJTUBE_API_URL";

/// 会话令牌环境变量（由身份服务签发，可选）
pub const SESSION_TOKEN_ENV: &str = "SJTUBE_SESSION_TOKEN";

/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 后端连接配置
#[derive(Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub session_token: Option<String>,
    pub request_timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// 从环境变量读取；未设置的项使用默认值。
    pub fn from_env() -> Self {
        let base_url = env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let session_token = env::var(SESSION_TOKEN_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            base_url,
            session_token,
            ..Default::default()
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            session_token: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// 防止 debug 泄漏令牌
impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<hidden>"),
            )
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
