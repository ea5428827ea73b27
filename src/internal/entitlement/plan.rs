use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 套餐类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    #[default]
    Free,
    Pro,
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanType::Free => f.write_str("Free"),
            PlanType::Pro => f.write_str("Pro"),
        }
    }
}

/// 当前用户的套餐信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInfo {
    pub plan: PlanType,
    pub is_pro: bool,
    pub is_trial: bool,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub trial_days_left: Option<i64>,
}

impl PlanInfo {
    pub fn free() -> Self {
        Self {
            plan: PlanType::Free,
            is_pro: false,
            is_trial: false,
            trial_ends_at: None,
            trial_days_left: None,
        }
    }

    pub fn pro() -> Self {
        Self {
            plan: PlanType::Pro,
            is_pro: true,
            is_trial: false,
            trial_ends_at: None,
            trial_days_left: None,
        }
    }

    /// 试用中的 Pro
    pub fn trial(ends_at: DateTime<Utc>, days_left: i64) -> Self {
        Self {
            plan: PlanType::Pro,
            is_pro: true,
            is_trial: true,
            trial_ends_at: Some(ends_at),
            trial_days_left: Some(days_left.max(0)),
        }
    }

    pub fn from_plan_type(plan: PlanType) -> Self {
        match plan {
            PlanType::Free => Self::free(),
            PlanType::Pro => Self::pro(),
        }
    }
}

impl Default for PlanInfo {
    fn default() -> Self {
        Self::free()
    }
}
