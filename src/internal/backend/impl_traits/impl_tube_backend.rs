use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::internal::backend::functions;
use crate::internal::backend::structs::{
    ApiError, BackendAuth, DownloadRequest, DownloadStartResponse, HistoryItem,
    TaskStatus, ValidateResponse,
};
use crate::internal::backend::traits::TubeBackend;

#[async_trait]
impl TubeBackend for BackendAuth {
    async fn validate(&self, url: &str) -> Result<ValidateResponse, ApiError> {
        functions::validate_url(self, url).await
    }

    async fn start_download(
        &self,
        request: &DownloadRequest,
    ) -> Result<DownloadStartResponse, ApiError> {
        functions::start_download(self, request).await
    }

    async fn task_status(&self, task_id: &str) -> Result<TaskStatus, ApiError> {
        functions::get_task_status(self, task_id).await
    }

    async fn history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        functions::get_history(self).await
    }

    async fn delete_file(&self, filename: &str) -> Result<(), ApiError> {
        functions::delete_history_file(self, filename).await
    }

    async fn save_file(
        &self,
        filename: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, ApiError> {
        functions::save_file(self, filename, dest_dir).await
    }
}
