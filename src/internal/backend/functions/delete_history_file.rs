use tracing::info;

use super::response::ensure_success;
use crate::internal::backend::enums::Endpoint;
use crate::internal::backend::structs::{ApiError, BackendAuth};

/// 删除一个已完成文件（`DELETE /api/history/{filename}`），成功时无响应体
pub async fn delete_history_file(
    auth: &BackendAuth,
    filename: &str,
) -> Result<(), ApiError> {
    let endpoint = Endpoint::HistoryFile(filename);
    let target = auth.endpoint_url(&endpoint)?;

    let res = auth
        .client
        .request(endpoint.method(), target)
        .timeout(auth.request_timeout)
        .send()
        .await?;

    ensure_success(res).await?;
    info!(filename, "history file deleted");
    Ok(())
}
