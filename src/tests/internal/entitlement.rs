//! 套餐测试：清晰度锁定规则、元数据试用期计算、定价页文案。

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::json;

use crate::backend::{AudioFormat, Quality};
use crate::entitlement::{
    available_qualities, is_audio_format_locked, is_quality_locked,
    is_quality_str_locked, plan_catalog, AllAccess, Entitlement, FixedPlan,
    MetadataPlan, PlanInfo, PlanType, FREE_QUALITIES,
};

// ═══════════════════════════ 清晰度 ═══════════════════════════

#[test]
fn quality_lock_matches_free_set() {
    for q in Quality::ALL {
        assert!(!is_quality_locked(q, true));
        assert_eq!(is_quality_locked(q, false), !FREE_QUALITIES.contains(&q));
    }
    assert_eq!(available_qualities(false), FREE_QUALITIES.to_vec());
    assert_eq!(available_qualities(true), Quality::ALL.to_vec());
}

#[test]
fn unknown_quality_strings_lock_for_free_users() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let len = rng.gen_range(0..8);
        let raw: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();

        assert!(!is_quality_str_locked(&raw, true));
        let free = ["144", "270", "360"].contains(&raw.as_str());
        assert_eq!(is_quality_str_locked(&raw, false), !free, "raw = {:?}", raw);
    }
    assert!(!is_quality_str_locked("270", false));
    assert!(is_quality_str_locked("480", false));
}

#[test]
fn audio_format_lock() {
    assert!(is_audio_format_locked(AudioFormat::M4a, false));
    assert!(!is_audio_format_locked(AudioFormat::M4a, true));
    assert!(!is_audio_format_locked(AudioFormat::Mp3, false));
}

// ═══════════════════════════ 套餐来源 ═══════════════════════════

#[test]
fn fixed_and_default_plans() {
    assert!(AllAccess.is_pro());
    assert!(!FixedPlan(PlanType::Free).is_pro());
    assert_eq!(FixedPlan(PlanType::Pro).plan(), PlanInfo::pro());
    assert_eq!(PlanInfo::default().plan, PlanType::Free);

    let shared: Arc<dyn Entitlement> = Arc::new(FixedPlan(PlanType::Free));
    assert_eq!(shared.plan().plan.to_string(), "Free");
}

#[test]
fn metadata_without_trial() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();

    let plan = MetadataPlan::new(json!({"plan": "pro"})).evaluate_at(now);
    assert_eq!(plan, PlanInfo::pro());

    let plan = MetadataPlan::new(json!({"plan": "PRO", "trial_ends": null}))
        .evaluate_at(now);
    assert!(plan.is_pro && !plan.is_trial);

    for metadata in [json!({}), json!({"plan": "free"}), json!({"plan": 3})] {
        assert_eq!(MetadataPlan::new(metadata).evaluate_at(now), PlanInfo::free());
    }
}

#[test]
fn metadata_trial_by_date() {
    let metadata = json!({"plan": "pro", "trial_ends": "2026-03-21"});

    // 试用当天结束前仍有效
    let now = Utc.with_ymd_and_hms(2026, 3, 21, 23, 0, 0).unwrap();
    let plan = MetadataPlan::new(metadata.clone()).evaluate_at(now);
    assert!(plan.is_pro && plan.is_trial);
    assert_eq!(plan.trial_days_left, Some(1));
    assert_eq!(
        plan.trial_ends_at,
        Some(Utc.with_ymd_and_hms(2026, 3, 22, 0, 0, 0).unwrap())
    );

    let now = Utc.with_ymd_and_hms(2026, 3, 12, 0, 0, 0).unwrap();
    let plan = MetadataPlan::new(metadata.clone()).evaluate_at(now);
    assert_eq!(plan.trial_days_left, Some(10));

    let now = Utc.with_ymd_and_hms(2026, 3, 22, 0, 0, 0).unwrap();
    let plan = MetadataPlan::new(metadata).evaluate_at(now);
    assert!(!plan.is_pro && !plan.is_trial);
    assert_eq!(plan.plan, PlanType::Free);
    assert!(plan.trial_ends_at.is_some());
}

#[test]
fn metadata_trial_by_timestamp_and_clock() {
    let end = Utc.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();
    let metadata = json!({"plan": "pro", "trial_ends": "2026-03-21T12:00:00Z"});

    let plan = MetadataPlan::new(metadata.clone())
        .with_clock(|| Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 1).unwrap())
        .plan();
    assert!(plan.is_trial);
    assert_eq!(plan.trial_ends_at, Some(end));
    assert_eq!(plan.trial_days_left, Some(1));

    let expired = MetadataPlan::new(metadata).with_clock(move || end);
    assert!(!expired.is_pro());
}

#[test]
fn unparseable_trial_end_falls_back_to_free() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    for raw in [json!("next week"), json!(20260321), json!("2026-13-40")] {
        let plan = MetadataPlan::new(json!({"plan": "pro", "trial_ends": raw}))
            .evaluate_at(now);
        assert_eq!(plan, PlanInfo::free());
    }
}

// ═══════════════════════════ 定价页 ═══════════════════════════

#[test]
fn catalog_for_free_user() {
    let offers = plan_catalog(&PlanInfo::free());
    assert_eq!(offers.len(), 2);

    let (free, pro) = (&offers[0], &offers[1]);
    assert_eq!((free.price, free.period), ("$0", "forever"));
    assert_eq!((pro.price, pro.period), ("$4.99", "/ month"));
    assert!(free.is_current && !pro.is_current);
    assert!(pro.highlighted && !free.highlighted);
    assert_eq!(free.cta, "Current Plan");
    assert_eq!(pro.cta, "Upgrade to Pro");
    assert!(pro.features.iter().all(|f| f.included));
    assert_eq!(free.features.iter().filter(|f| !f.included).count(), 4);
}

#[test]
fn catalog_for_pro_and_trial() {
    let offers = plan_catalog(&PlanInfo::pro());
    assert_eq!(offers[0].cta, "Current: Pro");
    assert_eq!(offers[1].cta, "Current Plan ✓");
    assert!(offers[1].is_current);

    let ends = Utc.with_ymd_and_hms(2026, 3, 21, 0, 0, 0).unwrap();
    let offers = plan_catalog(&PlanInfo::trial(ends, 6));
    assert_eq!(offers[1].cta, "Trial: 6 days left");
}
