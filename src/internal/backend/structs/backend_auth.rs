use core::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client,
};
use sha2::{Digest, Sha256};
use url::Url;

use super::api_error::ApiError;
use super::backend_config::BackendConfig;
use crate::internal::backend::enums::Endpoint;

/// 后端访问凭据
///
/// 该结构体定位
/// - 持有共享的 HTTP 客户端、规范化后的后端根地址，以及可选的会话令牌
/// - 所有接口函数、下载历史、文件保存都通过它访问后端
///
/// 默认Eq时会匹配base_url和令牌指纹，如果需要单独比较令牌，需使用eq_only_token方法
#[derive(Clone)]
pub struct BackendAuth {
    pub client: Client,     // 内部是Arc，不需要特殊处理
    pub base_url: Arc<Url>, // 需要跨任务共享，用 Arc
    pub(crate) token_fingerprint: Option<Arc<String>>, // 只保存摘要，不保存令牌本身
    pub(crate) request_timeout: Duration, // 仅用于 JSON 接口，文件流不设总超时
}

impl BackendAuth {
    /// 按配置创建凭据
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let http_client = _InternalHttpClient::_create(config)?;
        let base_url = _format_base_url(&config.base_url)?;

        Ok(Self {
            client: http_client.client,
            base_url: Arc::new(base_url),
            token_fingerprint: http_client.token_fingerprint.map(Arc::new),
            request_timeout: config.request_timeout,
        })
    }

    /// 仅指定后端地址，不带令牌
    pub fn from_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(&BackendConfig::new(base_url))
    }

    /// 读取环境变量创建凭据
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&BackendConfig::from_env())
    }

    /// 拼出某个接口的完整地址
    pub fn endpoint_url(&self, endpoint: &Endpoint<'_>) -> Result<Url, ApiError> {
        if !endpoint.has_valid_segment() {
            return Err(ApiError::InvalidFilename(
                endpoint.segment().unwrap_or_default().to_string(),
            ));
        }

        let joined = self
            .base_url
            .join(&endpoint.path())
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        if joined.scheme() != self.base_url.scheme()
            || joined.host_str() != self.base_url.host_str()
            || !joined.path().starts_with(self.base_url.path())
        {
            return Err(ApiError::InvalidUrl(joined.to_string()));
        }

        Ok(joined)
    }

    /// 已完成文件的下载地址（`/downloads/{filename}`）
    pub fn download_url(&self, filename: &str) -> Result<Url, ApiError> {
        self.endpoint_url(&Endpoint::File(filename))
    }

    /// 是否带有会话令牌
    pub fn has_session_token(&self) -> bool {
        self.token_fingerprint.is_some()
    }

    /// 仅比较令牌是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.token_fingerprint == other.token_fingerprint
    }
}

impl PartialEq for BackendAuth {
    fn eq(&self, other: &Self) -> bool {
        self.token_fingerprint == other.token_fingerprint
            && self.base_url == other.base_url
    }
}

/// 防止debug泄漏令牌
impl fmt::Debug for BackendAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendAuth")
            .field("base_url", &self.base_url.as_str())
            .field("client", &"<Client with hidden authorization>")
            .finish()
    }
}

fn _format_base_url(url: &str) -> Result<Url, ApiError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ApiError::InvalidUrl("后端地址为空".to_string()));
    }

    let mut base_url =
        Url::parse(url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl(format!(
            "不支持的协议: {}",
            base_url.scheme()
        )));
    }

    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 内部临时使用的http客户端结构体，在初始化BackendAuth时使用
struct _InternalHttpClient {
    client: Client,
    token_fingerprint: Option<String>,
}

impl _InternalHttpClient {
    fn _fingerprint(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn _create(config: &BackendConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let token = config
            .session_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        if let Some(token) = token {
            let mut auth_value =
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ApiError::Client(e.to_string()))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            token_fingerprint: token.map(Self::_fingerprint),
        })
    }
}
