//! 后端接口错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    /// 非 2xx 响应；`message` 优先取响应体的 `detail`，否则为状态描述。
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("响应解析失败: {0}")]
    Decode(String),

    #[error("地址格式错误: {0}")]
    InvalidUrl(String),

    #[error("非法文件名: {0}")]
    InvalidFilename(String),

    #[error("创建 HTTP 客户端失败: {0}")]
    Client(String),

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),
}

impl ApiError {
    /// 后端返回的 HTTP 状态码（仅 `Status` 变体有）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
