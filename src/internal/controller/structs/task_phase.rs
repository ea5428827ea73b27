/// 单个任务在客户端的阶段
///
/// `Idle → Active → Done | Errored`；新任务开始时重新进入 `Active`。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskPhase {
    #[default]
    Idle,
    /// 正在轮询
    Active { task_id: String },
    Done {
        task_id: String,
        filename: Option<String>,
    },
    Errored { task_id: String, message: String },
}

impl TaskPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskPhase::Done { .. } | TaskPhase::Errored { .. })
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TaskPhase::Active { .. })
    }

    pub fn task_id(&self) -> Option<&str> {
        match self {
            TaskPhase::Idle => None,
            TaskPhase::Active { task_id }
            | TaskPhase::Done { task_id, .. }
            | TaskPhase::Errored { task_id, .. } => Some(task_id),
        }
    }
}
