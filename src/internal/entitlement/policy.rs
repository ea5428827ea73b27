//! 权益能力：控制器只询问“当前用户是不是 Pro”，具体策略由调用方注入。

use std::sync::Arc;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde_json::Value;
use tracing::warn;

use super::plan::{PlanInfo, PlanType};

/// 权益查询接口
pub trait Entitlement: Send + Sync {
    /// 当前套餐信息
    fn plan(&self) -> PlanInfo;

    /// 是否拥有 Pro 权益
    fn is_pro(&self) -> bool {
        self.plan().is_pro
    }
}

/// 所有用户一律视为 Pro（当前线上行为）
#[derive(Debug, Clone, Copy, Default)]
pub struct AllAccess;

impl Entitlement for AllAccess {
    fn plan(&self) -> PlanInfo {
        PlanInfo::pro()
    }
}

/// 固定套餐
#[derive(Debug, Clone, Copy)]
pub struct FixedPlan(pub PlanType);

impl Entitlement for FixedPlan {
    fn plan(&self) -> PlanInfo {
        PlanInfo::from_plan_type(self.0)
    }
}

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// 根据身份服务的公开元数据计算套餐。
///
/// 元数据格式：`{"plan": "pro"}`，试用为 `{"plan": "pro", "trial_ends": "2026-03-21"}`。
/// `trial_ends` 可以是日期（当天结束前有效，按 UTC）或 RFC 3339 时间。
/// 试用到期后回落为免费；无法解析的 `trial_ends` 同样按免费处理。
#[derive(Clone)]
pub struct MetadataPlan {
    metadata: Value,
    clock: Clock,
}

impl MetadataPlan {
    pub fn new(metadata: Value) -> Self {
        Self {
            metadata,
            clock: Arc::new(Utc::now),
        }
    }

    /// 替换时钟，便于按指定时间计算
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// 按指定时间计算套餐
    pub fn evaluate_at(&self, now: DateTime<Utc>) -> PlanInfo {
        let raw_plan = self
            .metadata
            .get("plan")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_ascii_lowercase());

        if raw_plan.as_deref() != Some("pro") {
            return PlanInfo::free();
        }

        let trial_ends = match self.metadata.get("trial_ends") {
            None | Some(Value::Null) => return PlanInfo::pro(),
            Some(value) => value.as_str().and_then(parse_trial_end),
        };

        let Some(ends_at) = trial_ends else {
            warn!(metadata = %self.metadata, "unparseable trial_ends, treating as free");
            return PlanInfo::free();
        };

        if now >= ends_at {
            return PlanInfo {
                trial_ends_at: Some(ends_at),
                ..PlanInfo::free()
            };
        }

        let remaining_secs = (ends_at - now).num_seconds();
        let days_left = (remaining_secs + 86_399) / 86_400;
        PlanInfo::trial(ends_at, days_left)
    }
}

impl Entitlement for MetadataPlan {
    fn plan(&self) -> PlanInfo {
        self.evaluate_at((self.clock)())
    }
}

impl std::fmt::Debug for MetadataPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataPlan")
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// 日期形式取次日零点（UTC），即当天整天有效
fn parse_trial_end(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()?
        .checked_add_days(Days::new(1))?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}
