pub mod controller_config;
pub mod controller_error;
pub mod directory_saver;
pub mod download_task_controller;
pub mod notice;
pub(crate) mod poll_loop;
pub mod reactive_state;
pub mod task_handle;
pub mod task_phase;
pub mod validation;

// 重导出公共类型
pub use controller_config::{ControllerConfig, PollRetryPolicy};
pub use controller_error::ControllerError;
pub use directory_saver::DirectorySaver;
pub use download_task_controller::DownloadTaskController;
pub use notice::{Notice, NoticeLevel};
pub use poll_loop::{DEFAULT_JOB_ERROR, POLL_GAVE_UP_MESSAGE};
pub use reactive_state::ControllerReactiveState;
pub use task_handle::TaskHandle;
pub use task_phase::TaskPhase;
pub use validation::{
    is_supported_url, INVALID_VIDEO_MESSAGE, SUPPORTED_HOSTS,
    VALIDATION_UNREACHABLE_MESSAGE,
};
