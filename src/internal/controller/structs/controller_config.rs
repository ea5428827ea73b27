use std::time::Duration;

/// 默认输入防抖时长（毫秒）
pub const DEFAULT_DEBOUNCE_MS: u64 = 800;

/// 默认任务状态轮询间隔（毫秒）
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// 默认连续轮询失败上限
pub const DEFAULT_MAX_POLL_FAILURES: u32 = 30;

/// 默认退避倍数
pub const DEFAULT_BACKOFF_FACTOR: u32 = 2;

/// 默认最大轮询间隔（毫秒）
pub const DEFAULT_MAX_POLL_INTERVAL_MS: u64 = 10_000;

/// 轮询遇到网络错误时的重试策略
///
/// 失败后间隔乘以 `backoff_factor`，不超过 `max_interval`；任意一次成功后恢复为基础间隔。
/// 连续失败达到 `max_consecutive_failures` 后放弃，`None` 表示无限重试。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollRetryPolicy {
    pub max_consecutive_failures: Option<u32>,
    pub backoff_factor: u32,
    pub max_interval: Duration,
}

impl PollRetryPolicy {
    /// 固定间隔、无限重试
    pub fn unbounded() -> Self {
        Self {
            max_consecutive_failures: None,
            backoff_factor: 1,
            max_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// 连续失败 `failures` 次后是否应放弃
    pub fn is_exhausted(&self, failures: u32) -> bool {
        self.max_consecutive_failures
            .is_some_and(|max| failures >= max)
    }

    /// 下一次轮询前的等待时长
    pub fn next_delay(&self, current: Duration, base: Duration) -> Duration {
        let cap = self.max_interval.max(base);
        current
            .checked_mul(self.backoff_factor.max(1))
            .unwrap_or(cap)
            .min(cap)
    }
}

impl Default for PollRetryPolicy {
    fn default() -> Self {
        Self {
            max_consecutive_failures: Some(DEFAULT_MAX_POLL_FAILURES),
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            max_interval: Duration::from_millis(DEFAULT_MAX_POLL_INTERVAL_MS),
        }
    }
}

/// 下载任务控制器配置
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// 最后一次输入后多久发起地址校验
    pub debounce: Duration,
    /// 任务状态轮询间隔
    pub poll_interval: Duration,
    pub poll_retry: PollRetryPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            poll_retry: PollRetryPolicy::default(),
        }
    }
}
