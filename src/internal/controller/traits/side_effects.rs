//! 控制器的外部副作用：保存文件、写剪贴板。由调用方按运行环境注入。

use std::path::PathBuf;

use async_trait::async_trait;

use crate::internal::backend::structs::ApiError;

/// 写剪贴板失败
#[derive(Debug, Clone)]
pub struct ClipboardError(pub String);

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "写入剪贴板失败: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

/// 任务完成后的“另存为”动作
#[async_trait]
pub trait FileSaver: Send + Sync {
    /// 保存后端已完成的文件，返回本地路径
    async fn save(&self, filename: &str) -> Result<PathBuf, ApiError>;
}

/// 剪贴板
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
