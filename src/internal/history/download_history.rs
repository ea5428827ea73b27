use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::internal::backend::structs::{ApiError, HistoryItem};
use crate::internal::backend::traits::TubeBackend;
use crate::internal::controller::traits::side_effects::FileSaver;
use crate::internal::states::reactive_core::{PropertyWatcher, ReactiveProperty};

use super::file_kind::FileKind;

/// 列表统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub count: usize,
    pub total_bytes: u64,
    pub videos: usize,
    pub audios: usize,
}

/// 已完成文件列表，缓存最近一次拉取的结果
#[derive(Clone)]
pub struct DownloadHistory {
    backend: Arc<dyn TubeBackend>,
    items: ReactiveProperty<Vec<HistoryItem>>,
    loading: ReactiveProperty<bool>,
}

impl DownloadHistory {
    pub fn new(backend: Arc<dyn TubeBackend>) -> Self {
        Self {
            backend,
            items: ReactiveProperty::new(Vec::new()),
            loading: ReactiveProperty::new(false),
        }
    }

    /// 重新拉取列表并替换缓存；失败时保留旧列表
    pub async fn refresh(&self) -> Result<Vec<HistoryItem>, ApiError> {
        self.loading.update(true);
        let result = self.backend.history().await;
        self.loading.update(false);

        match result {
            Ok(items) => {
                debug!(count = items.len(), "history refreshed");
                self.items.update(items.clone());
                Ok(items)
            }
            Err(err) => {
                warn!(error = %err, "failed to load history");
                Err(err)
            }
        }
    }

    /// 删除文件；后端确认后才从本地列表移除
    pub async fn delete(&self, filename: &str) -> Result<(), ApiError> {
        self.backend.delete_file(filename).await?;
        self.items
            .update_field(|items| items.retain(|item| item.filename != filename));
        info!(filename, "history file deleted");
        Ok(())
    }

    /// 用给定的保存方式另存为
    pub async fn save(
        &self,
        filename: &str,
        saver: &dyn FileSaver,
    ) -> Result<PathBuf, ApiError> {
        saver.save(filename).await
    }

    pub fn items(&self) -> Vec<HistoryItem> {
        self.items.get_current()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get_current()
    }

    pub fn watch_items(&self) -> PropertyWatcher<Vec<HistoryItem>> {
        self.items.watch()
    }

    pub fn summary(&self) -> HistorySummary {
        self.items.map(|items| {
            items.iter().fold(HistorySummary::default(), |mut acc, item| {
                acc.count += 1;
                acc.total_bytes += item.size;
                match FileKind::from_filename(&item.filename) {
                    FileKind::Video => acc.videos += 1,
                    FileKind::Audio => acc.audios += 1,
                    FileKind::Other => {}
                }
                acc
            })
        })
    }
}

impl std::fmt::Debug for DownloadHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadHistory")
            .field("items", &self.items.map(Vec::len))
            .field("loading", &self.is_loading())
            .finish()
    }
}
