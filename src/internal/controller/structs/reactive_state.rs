use crate::internal::backend::structs::{TaskStatus, VideoInfo};
use crate::internal::states::queue_reactive::{
    QueueReactiveConsumer, QueueReactiveProperty,
};
use crate::internal::states::reactive_core::ReactiveProperty;

use super::notice::Notice;
use super::task_phase::TaskPhase;

/// 控制器响应式状态（界面只读，通过 watch 监听）
#[derive(Debug, Clone)]
pub struct ControllerReactiveState {
    /// 当前输入框中的地址（未去空白）
    pub url: ReactiveProperty<String>,
    /// 当前地址对应的视频信息，地址变化时清空
    pub video_info: ReactiveProperty<Option<VideoInfo>>,
    /// 是否有校验请求在途
    pub validating: ReactiveProperty<bool>,
    /// 当前任务阶段
    pub phase: ReactiveProperty<TaskPhase>,
    /// 最近一次轮询得到的任务状态
    pub task_status: ReactiveProperty<Option<TaskStatus>>,
    /// 提示队列（生产者端）
    pub(crate) notices: QueueReactiveProperty<Notice>,
}

impl ControllerReactiveState {
    pub(crate) fn new() -> (Self, QueueReactiveConsumer<Notice>) {
        let (notices, consumer) = QueueReactiveProperty::new();
        let state = Self {
            url: ReactiveProperty::new(String::new()),
            video_info: ReactiveProperty::new(None),
            validating: ReactiveProperty::new(false),
            phase: ReactiveProperty::new(TaskPhase::Idle),
            task_status: ReactiveProperty::new(None),
            notices,
        };
        (state, consumer)
    }

    pub(crate) fn notify(&self, notice: Notice) {
        self.notices.send(notice);
    }
}
