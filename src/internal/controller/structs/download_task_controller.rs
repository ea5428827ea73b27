use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::internal::backend::structs::{
    DownloadMode, DownloadRequest, TaskState, TaskStatus, VideoInfo,
};
use crate::internal::backend::traits::TubeBackend;
use crate::internal::controller::traits::side_effects::{Clipboard, FileSaver};
use crate::internal::entitlement::plan::PlanInfo;
use crate::internal::entitlement::policy::{AllAccess, Entitlement};
use crate::internal::entitlement::quality_gate::{
    is_audio_format_locked, is_quality_locked,
};
use crate::internal::states::queue_reactive::QueueReactiveConsumer;
use crate::internal::states::reactive_core::PropertyWatcher;

use super::controller_config::ControllerConfig;
use super::controller_error::ControllerError;
use super::notice::Notice;
use super::poll_loop::{run_poll_loop, save_completed, PollContext};
use super::reactive_state::ControllerReactiveState;
use super::task_handle::TaskHandle;
use super::task_phase::TaskPhase;
use super::validation::{is_supported_url, run_validation, ValidationGate};

/// 下载任务控制器
///
/// 负责地址防抖校验、创建任务、轮询进度直到终态，以及完成后的保存动作。
/// 同一时间只轮询一个任务；销毁控制器会同时停止防抖定时器和轮询循环。
pub struct DownloadTaskController {
    backend: Arc<dyn TubeBackend>,
    entitlement: Arc<dyn Entitlement>,
    saver: Option<Arc<dyn FileSaver>>,
    clipboard: Option<Arc<dyn Clipboard>>,
    config: ControllerConfig,
    reactive_state: ControllerReactiveState,
    notice_consumer: Option<QueueReactiveConsumer<Notice>>,
    generation: Arc<AtomicU64>,
    validation_gate: ValidationGate,
    poll_task: Option<TaskHandle>,
    debounce_task: Option<TaskHandle>,
}

/// 构造
impl DownloadTaskController {
    pub fn new(backend: Arc<dyn TubeBackend>) -> Self {
        let (reactive_state, notice_consumer) = ControllerReactiveState::new();
        Self {
            backend,
            entitlement: Arc::new(AllAccess),
            saver: None,
            clipboard: None,
            config: ControllerConfig::default(),
            reactive_state,
            notice_consumer: Some(notice_consumer),
            generation: Arc::new(AtomicU64::new(0)),
            validation_gate: ValidationGate::default(),
            poll_task: None,
            debounce_task: None,
        }
    }

    pub fn with_entitlement(mut self, entitlement: Arc<dyn Entitlement>) -> Self {
        self.entitlement = entitlement;
        self
    }

    /// 任务完成后自动保存文件
    pub fn with_file_saver(mut self, saver: Arc<dyn FileSaver>) -> Self {
        self.saver = Some(saver);
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// 取走提示队列的消费端，只能取一次
    pub fn take_notices(&mut self) -> Option<QueueReactiveConsumer<Notice>> {
        self.notice_consumer.take()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn reactive_state(&self) -> &ControllerReactiveState {
        &self.reactive_state
    }
}

/// 地址输入与校验
impl DownloadTaskController {
    /// 更新输入框地址。
    ///
    /// 每次修改都会清空视频信息和缓存的任务状态，并取消尚未触发的校验；
    /// 可识别的地址在静默 `debounce` 之后发起校验。正在轮询的任务不受影响。
    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.debounce_task = None;

        let state = &self.reactive_state;
        let ticket = self.validation_gate.advance(|| {
            state.url.update(url.clone());
            state.video_info.update(None);
            state.task_status.update(None);
            state.validating.update(false);
        });

        if !is_supported_url(&url) {
            return;
        }

        let backend = Arc::clone(&self.backend);
        let state = state.clone();
        let gate = self.validation_gate.clone();
        let delay = self.config.debounce;
        let target = url.trim().to_string();
        self.debounce_task = Some(TaskHandle::spawn(async move {
            tokio::time::sleep(delay).await;
            // 失败已经写入状态和提示
            let _ = run_validation(backend.as_ref(), &state, &gate, ticket, &target)
                .await;
        }));
    }

    /// 跳过防抖，立即校验当前地址
    pub async fn validate_now(&mut self) -> Result<VideoInfo, ControllerError> {
        self.debounce_task = None;
        let url = self.reactive_state.url.map(|u| u.trim().to_string());
        if url.is_empty() {
            return Err(ControllerError::EmptyUrl);
        }
        if !is_supported_url(&url) {
            return Err(ControllerError::UnsupportedUrl(url));
        }
        let ticket = self.validation_gate.advance(|| {});
        run_validation(
            self.backend.as_ref(),
            &self.reactive_state,
            &self.validation_gate,
            ticket,
            &url,
        )
        .await
    }
}

/// 任务
impl DownloadTaskController {
    /// 当前套餐
    pub fn plan(&self) -> PlanInfo {
        self.entitlement.plan()
    }

    /// 创建下载任务并开始轮询，返回任务 id。
    ///
    /// 清晰度或音频格式未解锁时直接拒绝，不发起请求。创建失败时阶段保持不变，
    /// 之前的任务继续轮询。
    pub async fn start_job(
        &mut self,
        request: DownloadRequest,
    ) -> Result<String, ControllerError> {
        if request.url.trim().is_empty() {
            return Err(ControllerError::EmptyUrl);
        }

        let is_pro = self.entitlement.is_pro();
        match request.mode {
            DownloadMode::Video if is_quality_locked(request.quality, is_pro) => {
                self.reactive_state.notify(Notice::QualityLocked {
                    quality: request.quality,
                });
                return Err(ControllerError::QualityLocked(request.quality));
            }
            DownloadMode::Audio
                if is_audio_format_locked(request.audio_format, is_pro) =>
            {
                self.reactive_state.notify(Notice::FormatLocked {
                    format: request.audio_format,
                });
                return Err(ControllerError::FormatLocked(request.audio_format));
            }
            _ => {}
        }

        let response = match self.backend.start_download(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(url = %request.url.trim(), error = %err, "failed to start download");
                self.reactive_state.notify(Notice::DownloadFailed {
                    message: err.to_string(),
                });
                return Err(err.into());
            }
        };
        let task_id = response.task_id;
        info!(%task_id, mode = ?request.mode, "download task created");

        // 先停掉旧循环，再让它的代号失效
        if let Some(previous) = self.poll_task.take() {
            previous.stop().await;
        }
        let job = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let state = &self.reactive_state;
        state.task_status.update(None);
        state.phase.update(TaskPhase::Active {
            task_id: task_id.clone(),
        });
        state.notify(Notice::DownloadStarted {
            task_id: task_id.clone(),
        });

        let ctx = PollContext {
            backend: Arc::clone(&self.backend),
            saver: self.saver.clone(),
            state: state.clone(),
            config: self.config.clone(),
            task_id: task_id.clone(),
            generation: Arc::clone(&self.generation),
            job,
        };
        self.poll_task = Some(TaskHandle::spawn(run_poll_loop(ctx)));

        Ok(task_id)
    }

    /// 停止轮询。正在进行的任务回到 `Idle`，后端任务本身不受影响。
    pub fn cancel_polling(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if self.poll_task.take().is_some() {
            debug!("poll loop cancelled");
        }
        if self.reactive_state.phase.map(TaskPhase::is_active) {
            self.reactive_state.phase.update(TaskPhase::Idle);
        }
    }

    /// 对已完成的任务再次执行保存动作
    pub async fn save_again(&self) -> Result<PathBuf, ControllerError> {
        let filename = match self.reactive_state.phase.get_current() {
            TaskPhase::Done {
                filename: Some(filename),
                ..
            } => filename,
            _ => return Err(ControllerError::NothingToSave),
        };
        let saver = self.saver.as_ref().ok_or(ControllerError::NoFileSaver)?;
        Ok(save_completed(&self.reactive_state, saver.as_ref(), &filename).await?)
    }

    /// 复制当前视频标题到剪贴板
    pub async fn copy_title(&self) -> Result<(), ControllerError> {
        let clipboard =
            self.clipboard.as_ref().ok_or(ControllerError::NoClipboard)?;
        let title = self
            .reactive_state
            .video_info
            .map(|info| info.as_ref().map(|i| i.title.clone()))
            .ok_or(ControllerError::NoVideoInfo)?;
        clipboard.write_text(&title).await?;
        self.reactive_state.notify(Notice::TitleCopied);
        Ok(())
    }

    /// 挂起直到当前任务进入 `Done` 或 `Errored`
    pub async fn wait_for_terminal(&self) -> Result<TaskPhase, ControllerError> {
        let mut watcher = self.reactive_state.phase.watch();
        Ok(watcher.wait_until(TaskPhase::is_terminal).await?)
    }
}

/// 状态读取
impl DownloadTaskController {
    pub fn url(&self) -> String {
        self.reactive_state.url.get_current()
    }

    pub fn phase(&self) -> TaskPhase {
        self.reactive_state.phase.get_current()
    }

    pub fn task_status(&self) -> Option<TaskStatus> {
        self.reactive_state.task_status.get_current()
    }

    pub fn video_info(&self) -> Option<VideoInfo> {
        self.reactive_state.video_info.get_current()
    }

    pub fn is_validating(&self) -> bool {
        self.reactive_state.validating.get_current()
    }

    /// 轮询循环是否仍在运行
    pub fn is_polling(&self) -> bool {
        self.poll_task.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// 任务处于 `Active`，或最近一次状态为 downloading / processing
    pub fn is_download_active(&self) -> bool {
        if self.reactive_state.phase.map(TaskPhase::is_active) {
            return true;
        }
        self.reactive_state.task_status.map(|status| {
            status.as_ref().is_some_and(|s| {
                matches!(s.status, TaskState::Downloading | TaskState::Processing)
            })
        })
    }

    pub fn watch_phase(&self) -> PropertyWatcher<TaskPhase> {
        self.reactive_state.phase.watch()
    }
}

/// 响应式属性订阅：外部监听状态变化
impl DownloadTaskController {
    /// 订阅任务阶段变化
    pub fn subscribe_phase<F>(&self, return_current_value: bool, callback: F)
    where
        F: Fn(&TaskPhase) + Send + 'static,
    {
        let mut watcher = self.reactive_state.phase.watch();

        tokio::spawn(async move {
            if return_current_value {
                callback(&watcher.borrow());
            }

            while let Ok(phase) = watcher.changed().await {
                callback(&phase);
            }
        });
    }

    /// 订阅任务状态变化（地址修改或新任务开始时会收到 `None`）
    pub fn subscribe_task_status<F>(&self, return_current_value: bool, callback: F)
    where
        F: Fn(Option<&TaskStatus>) + Send + 'static,
    {
        let mut watcher = self.reactive_state.task_status.watch();

        tokio::spawn(async move {
            if return_current_value {
                callback(watcher.borrow().as_ref());
            }

            while let Ok(status) = watcher.changed().await {
                callback(status.as_ref());
            }
        });
    }

    /// 订阅视频信息变化
    pub fn subscribe_video_info<F>(&self, callback: F)
    where
        F: Fn(Option<&VideoInfo>) + Send + 'static,
    {
        let mut watcher = self.reactive_state.video_info.watch();

        tokio::spawn(async move {
            while let Ok(info) = watcher.changed().await {
                callback(info.as_ref());
            }
        });
    }
}

impl std::fmt::Debug for DownloadTaskController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadTaskController")
            .field("config", &self.config)
            .field("phase", &self.phase())
            .field("polling", &self.is_polling())
            .finish()
    }
}
