//! 后端能力接口：控制器和下载历史只依赖这个 trait，不直接依赖 HTTP 实现。

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::internal::backend::structs::{
    ApiError, DownloadRequest, DownloadStartResponse, HistoryItem, TaskStatus,
    ValidateResponse,
};

/// 下载服务后端
///
/// [`BackendAuth`](crate::backend::BackendAuth) 是基于 HTTP 的默认实现；
/// 测试或其他传输方式可以自行实现。
#[async_trait]
pub trait TubeBackend: Send + Sync {
    /// 校验视频地址
    async fn validate(&self, url: &str) -> Result<ValidateResponse, ApiError>;

    /// 创建下载任务
    async fn start_download(
        &self,
        request: &DownloadRequest,
    ) -> Result<DownloadStartResponse, ApiError>;

    /// 查询任务状态
    async fn task_status(&self, task_id: &str) -> Result<TaskStatus, ApiError>;

    /// 已完成文件列表
    async fn history(&self) -> Result<Vec<HistoryItem>, ApiError>;

    /// 删除已完成文件
    async fn delete_file(&self, filename: &str) -> Result<(), ApiError>;

    /// 把已完成文件保存到本地目录，返回最终路径
    async fn save_file(
        &self,
        filename: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, ApiError>;
}
