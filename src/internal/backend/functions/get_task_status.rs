use super::response::read_json;
use crate::internal::backend::enums::Endpoint;
use crate::internal::backend::structs::{ApiError, BackendAuth, TaskStatus};

/// 查询任务状态（`GET /api/status/{task_id}`）
pub async fn get_task_status(
    auth: &BackendAuth,
    task_id: &str,
) -> Result<TaskStatus, ApiError> {
    let endpoint = Endpoint::Status(task_id);
    let target = auth.endpoint_url(&endpoint)?;

    let res = auth
        .client
        .request(endpoint.method(), target)
        .timeout(auth.request_timeout)
        .send()
        .await?;

    read_json(res).await
}
