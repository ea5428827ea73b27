use super::response::read_json;
use crate::internal::backend::enums::Endpoint;
use crate::internal::backend::structs::{ApiError, BackendAuth, HistoryItem};

/// 获取已完成文件列表（`GET /api/history`）
pub async fn get_history(
    auth: &BackendAuth,
) -> Result<Vec<HistoryItem>, ApiError> {
    let endpoint = Endpoint::History;
    let target = auth.endpoint_url(&endpoint)?;

    let res = auth
        .client
        .request(endpoint.method(), target)
        .timeout(auth.request_timeout)
        .send()
        .await?;

    read_json(res).await
}
