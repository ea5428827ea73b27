use serde::{Deserialize, Serialize};

/// 后端任务所处的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Pending,
    Downloading,
    Processing,
    Done,
    Error,
}

impl TaskState {
    /// done / error 之后不会再变化
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Done | TaskState::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Pending => "pending",
            TaskState::Downloading => "downloading",
            TaskState::Processing => "processing",
            TaskState::Done => "done",
            TaskState::Error => "error",
        }
    }
}

/// `GET /api/status/{task_id}` 的响应；归后端所有，客户端只缓存最近一次的副本。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub task_id: String,
    pub status: TaskState,
    #[serde(default)]
    pub progress: f64, // 0～100
    #[serde(default)]
    pub speed: Option<String>,
    #[serde(default)]
    pub eta: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TaskStatus {
    /// 限制在 0～100 内的进度
    pub fn progress_clamped(&self) -> f64 {
        if self.progress.is_nan() {
            return 0.0;
        }
        self.progress.clamp(0.0, 100.0)
    }

    /// 进度文本，如 `55.0%`
    pub fn progress_display(&self) -> String {
        format!("{:.1}%", self.progress_clamped())
    }
}
