use std::path::PathBuf;

use crate::internal::backend::structs::{AudioFormat, Quality};

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// 控制器发给界面的提示（通过提示队列按顺序投递）
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    VideoFound { title: String },
    ValidationFailed { message: String },
    DownloadStarted { task_id: String },
    DownloadComplete { filename: Option<String> },
    DownloadFailed { message: String },
    QualityLocked { quality: Quality },
    FormatLocked { format: AudioFormat },
    TitleCopied,
    FileSaved { path: PathBuf },
    SaveFailed { filename: String, message: String },
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::VideoFound { .. }
            | Notice::DownloadComplete { .. }
            | Notice::TitleCopied
            | Notice::FileSaved { .. } => NoticeLevel::Success,
            Notice::DownloadStarted { .. }
            | Notice::QualityLocked { .. }
            | Notice::FormatLocked { .. } => NoticeLevel::Info,
            Notice::ValidationFailed { .. }
            | Notice::DownloadFailed { .. }
            | Notice::SaveFailed { .. } => NoticeLevel::Error,
        }
    }

    /// 展示给用户的文案
    pub fn message(&self) -> String {
        match self {
            Notice::VideoFound { .. } => "Video found!".to_string(),
            Notice::ValidationFailed { message } => message.clone(),
            Notice::DownloadStarted { .. } => "Download started!".to_string(),
            Notice::DownloadComplete { .. } => "Download complete!".to_string(),
            Notice::DownloadFailed { message } => message.clone(),
            Notice::QualityLocked { quality } => format!(
                "{} requires a Pro plan. Upgrade to unlock!",
                quality.label()
            ),
            Notice::FormatLocked { format } => {
                format!("{} format requires Pro plan", format)
            }
            Notice::TitleCopied => "Title copied!".to_string(),
            Notice::FileSaved { path } => format!("Saved to {}", path.display()),
            Notice::SaveFailed { filename, message } => {
                format!("Failed to save {}: {}", filename, message)
            }
        }
    }
}
