use serde::Serialize;
use tracing::debug;

use super::response::read_json;
use crate::internal::backend::enums::Endpoint;
use crate::internal::backend::structs::{ApiError, BackendAuth, ValidateResponse};

#[derive(Serialize)]
struct ValidateBody<'a> {
    url: &'a str,
}

/// 校验视频地址并获取元数据（`POST /api/validate`）
///
/// 后端认为地址无效时仍返回 `Ok`，由 `valid` / `error` 字段说明原因。
pub async fn validate_url(
    auth: &BackendAuth,
    url: &str,
) -> Result<ValidateResponse, ApiError> {
    let endpoint = Endpoint::Validate;
    let target = auth.endpoint_url(&endpoint)?;
    debug!(url, "validating video url");

    let res = auth
        .client
        .request(endpoint.method(), target)
        .timeout(auth.request_timeout)
        .json(&ValidateBody { url })
        .send()
        .await?;

    read_json(res).await
}
