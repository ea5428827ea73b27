use tracing::info;

use super::response::read_json;
use crate::internal::backend::enums::Endpoint;
use crate::internal::backend::structs::{
    ApiError, BackendAuth, DownloadRequest, DownloadStartResponse,
};

/// 创建下载任务（`POST /api/download`），返回后端分配的任务 id
///
/// 请求体按 [`DownloadRequest::to_wire`] 规范化后发送。
pub async fn start_download(
    auth: &BackendAuth,
    request: &DownloadRequest,
) -> Result<DownloadStartResponse, ApiError> {
    let endpoint = Endpoint::Download;
    let target = auth.endpoint_url(&endpoint)?;
    let body = request.to_wire();

    let res = auth
        .client
        .request(endpoint.method(), target)
        .timeout(auth.request_timeout)
        .json(&body)
        .send()
        .await?;

    let started: DownloadStartResponse = read_json(res).await?;
    info!(
        task_id = %started.task_id,
        mode = ?body.mode,
        quality = body.quality.as_str(),
        "download task created"
    );
    Ok(started)
}
