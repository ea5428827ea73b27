use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::internal::backend::structs::ApiError;

/// 错误响应体，只关心 `detail`
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// 从非 2xx 响应体中提取错误信息：优先 `detail`，否则为状态描述。
///
/// `detail` 可能是字符串，也可能是结构化的校验错误，后者原样序列化。
pub fn error_message_from_body(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| match d {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        });

    detail.unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string())
    })
}

/// 非 2xx 时读取响应体并转换为 [`ApiError::Status`]
pub(crate) async fn ensure_success(res: Response) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message_from_body(status, &body),
    })
}

/// 检查状态码后按 JSON 解析响应体
pub(crate) async fn read_json<T: DeserializeOwned>(
    res: Response,
) -> Result<T, ApiError> {
    let res = ensure_success(res).await?;
    let text = res.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
