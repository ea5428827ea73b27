//! 视频地址校验：本地预检 + 调用后端。

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::internal::backend::structs::{ApiError, ValidateResponse, VideoInfo};
use crate::internal::backend::traits::TubeBackend;

use super::controller_error::ControllerError;
use super::notice::Notice;
use super::reactive_state::ControllerReactiveState;

/// 可识别的视频站点域名
pub const SUPPORTED_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];

/// 后端判定无效但没有给出原因时的提示
pub const INVALID_VIDEO_MESSAGE: &str = "Invalid video URL";

/// 网络失败时的提示
pub const VALIDATION_UNREACHABLE_MESSAGE: &str =
    "Failed to validate URL. Is the backend running?";

/// 去空白后非空，且包含可识别的域名
pub fn is_supported_url(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && SUPPORTED_HOSTS.iter().any(|host| trimmed.contains(host))
}

/// 校验代号：地址每次变化都会换代，旧代号的校验结果不再写入状态。
///
/// 换代和写入都在同一把锁内完成，检查通过后不会被新的地址插队。
#[derive(Debug, Clone, Default)]
pub(crate) struct ValidationGate {
    current: Arc<Mutex<u64>>,
}

impl ValidationGate {
    fn lock(&self) -> MutexGuard<'_, u64> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 换代，并在锁内执行 `invalidate`（清空旧地址的状态），返回新代号
    pub(crate) fn advance<F: FnOnce()>(&self, invalidate: F) -> u64 {
        let mut current = self.lock();
        *current += 1;
        invalidate();
        *current
    }

    /// 代号仍是最新时在锁内执行 `write`
    fn commit<R, F: FnOnce() -> R>(&self, ticket: u64, write: F) -> Option<R> {
        let current = self.lock();
        (*current == ticket).then(write)
    }
}

/// 调用后端校验 `url` 并写入状态；成功时保存视频信息，失败时清空。
///
/// 等待期间地址已经变化（`ticket` 过期）时不写任何状态，返回 [`ControllerError::Superseded`]。
pub(crate) async fn run_validation(
    backend: &dyn TubeBackend,
    state: &ControllerReactiveState,
    gate: &ValidationGate,
    ticket: u64,
    url: &str,
) -> Result<VideoInfo, ControllerError> {
    gate.commit(ticket, || state.validating.update(true))
        .ok_or(ControllerError::Superseded)?;
    let result = backend.validate(url).await;

    gate.commit(ticket, || {
        state.validating.update(false);
        apply_result(state, url, result)
    })
    .unwrap_or_else(|| {
        debug!(url, "validation result for a stale url dropped");
        Err(ControllerError::Superseded)
    })
}

fn apply_result(
    state: &ControllerReactiveState,
    url: &str,
    result: Result<ValidateResponse, ApiError>,
) -> Result<VideoInfo, ControllerError> {
    match result {
        Ok(res) => match (res.valid, res.info) {
            (true, Some(info)) => {
                debug!(url, title = %info.title, "video validated");
                state.video_info.update(Some(info.clone()));
                state.notify(Notice::VideoFound {
                    title: info.title.clone(),
                });
                Ok(info)
            }
            _ => {
                let message = res
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| INVALID_VIDEO_MESSAGE.to_string());
                debug!(url, %message, "video rejected by backend");
                state.video_info.update(None);
                state.notify(Notice::ValidationFailed {
                    message: message.clone(),
                });
                Err(ControllerError::InvalidVideo(message))
            }
        },
        Err(err) => {
            warn!(url, error = %err, "validation request failed");
            state.video_info.update(None);
            state.notify(Notice::ValidationFailed {
                message: VALIDATION_UNREACHABLE_MESSAGE.to_string(),
            });
            Err(err.into())
        }
    }
}
