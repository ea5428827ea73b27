//! 任务状态轮询循环：固定间隔查询，直到 done / error。

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::internal::backend::structs::{ApiError, TaskState, TaskStatus};
use crate::internal::backend::traits::TubeBackend;
use crate::internal::controller::traits::side_effects::FileSaver;

use super::controller_config::ControllerConfig;
use super::notice::Notice;
use super::reactive_state::ControllerReactiveState;
use super::task_phase::TaskPhase;

/// 后端报告失败但没有给出原因时的文案
pub const DEFAULT_JOB_ERROR: &str = "Download failed";

/// 连续轮询失败超过上限时的文案
pub const POLL_GAVE_UP_MESSAGE: &str = "lost contact with the download service";

pub(crate) struct PollContext {
    pub(crate) backend: Arc<dyn TubeBackend>,
    pub(crate) saver: Option<Arc<dyn FileSaver>>,
    pub(crate) state: ControllerReactiveState,
    pub(crate) config: ControllerConfig,
    pub(crate) task_id: String,
    /// 控制器当前任务代号；与 `job` 不一致说明本循环已被新任务取代
    pub(crate) generation: Arc<AtomicU64>,
    pub(crate) job: u64,
}

impl PollContext {
    fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.job
    }
}

/// 轮询直到终态。每一轮先等待再查询。
pub(crate) async fn run_poll_loop(ctx: PollContext) {
    let base = ctx.config.poll_interval;
    let policy = ctx.config.poll_retry.clone();
    let mut delay = base;
    let mut failures: u32 = 0;

    loop {
        tokio::time::sleep(delay).await;

        let result = ctx.backend.task_status(&ctx.task_id).await;
        if !ctx.is_current() {
            debug!(task_id = %ctx.task_id, "superseded poll loop exits");
            return;
        }

        match result {
            Ok(status) => {
                failures = 0;
                delay = base;
                if handle_status(&ctx, status).await {
                    return;
                }
            }
            Err(err) => {
                failures += 1;
                if policy.is_exhausted(failures) {
                    warn!(
                        task_id = %ctx.task_id,
                        failures,
                        error = %err,
                        "giving up polling task status"
                    );
                    fail(&ctx, POLL_GAVE_UP_MESSAGE.to_string());
                    return;
                }
                delay = policy.next_delay(delay, base);
                warn!(
                    task_id = %ctx.task_id,
                    failures,
                    retry_in_ms = duration_ms(delay),
                    error = %err,
                    "task status poll failed, retrying"
                );
            }
        }
    }
}

/// 处理一次轮询结果，返回是否到达终态
async fn handle_status(ctx: &PollContext, status: TaskStatus) -> bool {
    let state = status.status;
    let filename = status.filename.clone();
    let error = status.error.clone();

    debug!(
        task_id = %ctx.task_id,
        status = state.as_str(),
        progress = status.progress_clamped(),
        "task status"
    );
    ctx.state.task_status.update(Some(status));

    match state {
        TaskState::Pending | TaskState::Downloading | TaskState::Processing => {
            false
        }
        TaskState::Done => {
            info!(task_id = %ctx.task_id, filename = ?filename, "task finished");
            ctx.state.phase.update(TaskPhase::Done {
                task_id: ctx.task_id.clone(),
                filename: filename.clone(),
            });
            ctx.state.notify(Notice::DownloadComplete {
                filename: filename.clone(),
            });
            if let (Some(name), Some(saver)) = (filename, ctx.saver.as_ref()) {
                let _ = save_completed(&ctx.state, saver.as_ref(), &name).await;
            }
            true
        }
        TaskState::Error => {
            let message = error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_JOB_ERROR.to_string());
            warn!(task_id = %ctx.task_id, %message, "task failed");
            fail(ctx, message);
            true
        }
    }
}

fn fail(ctx: &PollContext, message: String) {
    ctx.state.phase.update(TaskPhase::Errored {
        task_id: ctx.task_id.clone(),
        message: message.clone(),
    });
    ctx.state.notify(Notice::DownloadFailed { message });
}

/// 执行保存动作并投递结果提示
pub(crate) async fn save_completed(
    state: &ControllerReactiveState,
    saver: &dyn FileSaver,
    filename: &str,
) -> Result<PathBuf, ApiError> {
    match saver.save(filename).await {
        Ok(path) => {
            state.notify(Notice::FileSaved { path: path.clone() });
            Ok(path)
        }
        Err(err) => {
            warn!(filename, error = %err, "saving finished file failed");
            state.notify(Notice::SaveFailed {
                filename: filename.to_string(),
                message: err.to_string(),
            });
            Err(err)
        }
    }
}

fn duration_ms(d: Duration) -> u64 {
    d.as_millis().try_into().unwrap_or(u64::MAX)
}
