//! 套餐对比（定价页数据）。

use serde::Serialize;

use super::plan::{PlanInfo, PlanType};

/// 套餐的一项功能
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanFeature {
    pub label: &'static str,
    pub included: bool,
}

/// 一个可购买的套餐
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanOffer {
    pub plan: PlanType,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: Vec<PlanFeature>,
    /// 按钮文案，随当前套餐变化
    pub cta: String,
    pub highlighted: bool,
    /// 是否就是用户当前的套餐
    pub is_current: bool,
}

const fn feature(label: &'static str, included: bool) -> PlanFeature {
    PlanFeature { label, included }
}

/// 生成定价页的套餐列表（Free、Pro 两项）
pub fn plan_catalog(current: &PlanInfo) -> Vec<PlanOffer> {
    let is_pro = current.is_pro;

    let free = PlanOffer {
        plan: PlanType::Free,
        name: "Free",
        price: "$0",
        period: "forever",
        description: "Get started with basic downloads",
        features: vec![
            feature("144p, 270p, 360p quality", true),
            feature("MP3 audio downloads", true),
            feature("5 downloads per day", true),
            feature("Basic dashboard", true),
            feature("480p+ quality", false),
            feature("1080p & Best quality", false),
            feature("M4A lossless audio", false),
            feature("Unlimited downloads", false),
        ],
        cta: (if is_pro { "Current: Pro" } else { "Current Plan" }).to_string(),
        highlighted: false,
        is_current: !is_pro,
    };

    let pro_cta = match (is_pro, current.is_trial, current.trial_days_left) {
        (true, true, Some(days)) => format!("Trial: {} days left", days),
        (true, _, _) => "Current Plan ✓".to_string(),
        (false, _, _) => "Upgrade to Pro".to_string(),
    };

    let pro = PlanOffer {
        plan: PlanType::Pro,
        name: "Pro",
        price: "$4.99",
        period: "/ month",
        description: "Unlock all qualities and features",
        features: vec![
            feature("All video qualities", true),
            feature("Best quality (4K/8K)", true),
            feature("MP3 + M4A audio", true),
            feature("Unlimited downloads", true),
            feature("Full dashboard stats", true),
            feature("Priority downloads", true),
            feature("Playlist support", true),
            feature("Early access to features", true),
        ],
        cta: pro_cta,
        highlighted: true,
        is_current: is_pro,
    };

    vec![free, pro]
}
