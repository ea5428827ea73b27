use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::internal::backend::structs::ApiError;
use crate::internal::backend::traits::TubeBackend;
use crate::internal::controller::traits::side_effects::FileSaver;

/// 把完成的文件保存到本地目录，目录不存在时自动创建。
#[derive(Clone)]
pub struct DirectorySaver {
    backend: Arc<dyn TubeBackend>,
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(backend: Arc<dyn TubeBackend>, dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            dir: dir.into(),
        }
    }

    /// 保存到系统“下载”目录；系统没有该目录时返回 `None`。
    pub fn in_download_dir(backend: Arc<dyn TubeBackend>) -> Option<Self> {
        dirs::download_dir().map(|dir| Self::new(backend, dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl FileSaver for DirectorySaver {
    async fn save(&self, filename: &str) -> Result<PathBuf, ApiError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(ApiError::CreateFile)?;
        self.backend.save_file(filename, &self.dir).await
    }
}

impl std::fmt::Debug for DirectorySaver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectorySaver")
            .field("dir", &self.dir)
            .finish()
    }
}
