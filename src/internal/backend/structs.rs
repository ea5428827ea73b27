pub mod api_error;
pub mod backend_auth;
pub mod backend_config;
pub mod download_request;
pub mod history_item;
pub mod task_status;
pub mod video_info;

// 重导出公共类型
pub use api_error::ApiError;
pub use backend_auth::BackendAuth;
pub use backend_config::BackendConfig;
pub use download_request::{
    AudioFormat, DownloadMode, DownloadRequest, DownloadStartResponse, Quality,
};
pub use history_item::HistoryItem;
pub use task_status::{TaskState, TaskStatus};
pub use video_info::{ValidateResponse, VideoInfo};
