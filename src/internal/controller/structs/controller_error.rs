//! 控制器错误类型。

use thiserror::Error;

use crate::internal::backend::structs::{ApiError, AudioFormat, Quality};
use crate::internal::controller::traits::side_effects::ClipboardError;
use crate::internal::states::reactive_core::ReactivePropertyError;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("地址为空")]
    EmptyUrl,

    #[error("不支持的视频地址: {0}")]
    UnsupportedUrl(String),

    /// 后端认为地址无效
    #[error("{0}")]
    InvalidVideo(String),

    #[error("清晰度 {0} 需要 Pro 套餐")]
    QualityLocked(Quality),

    #[error("音频格式 {0} 需要 Pro 套餐")]
    FormatLocked(AudioFormat),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// 校验期间地址已变化，结果被丢弃
    #[error("地址已变化，校验结果已丢弃")]
    Superseded,

    #[error("尚未获取视频信息")]
    NoVideoInfo,

    #[error("没有已完成的文件")]
    NothingToSave,

    #[error("未配置文件保存方式")]
    NoFileSaver,

    #[error("未配置剪贴板")]
    NoClipboard,

    #[error("{0}")]
    Clipboard(#[from] ClipboardError),

    #[error("控制器状态已销毁")]
    StateClosed(#[from] ReactivePropertyError),
}
