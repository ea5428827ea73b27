//! 清晰度 / 音频格式的套餐限制。纯函数，不关心套餐从哪里来。

use crate::internal::backend::structs::{AudioFormat, Quality};

/// 免费用户可选的清晰度
pub const FREE_QUALITIES: [Quality; 3] =
    [Quality::P144, Quality::P270, Quality::P360];

/// Pro 用户可选的清晰度
pub const PRO_QUALITIES: [Quality; 7] = Quality::ALL;

/// 按套餐列出可选清晰度
pub fn available_qualities(is_pro: bool) -> Vec<Quality> {
    if is_pro {
        PRO_QUALITIES.to_vec()
    } else {
        FREE_QUALITIES.to_vec()
    }
}

/// 某个清晰度在当前套餐下是否被锁定
pub fn is_quality_locked(quality: Quality, is_pro: bool) -> bool {
    !is_pro && !FREE_QUALITIES.contains(&quality)
}

/// 按线上取值判断，如 `"720"`；免费用户下，不在免费列表里的任何取值都视为锁定
pub fn is_quality_str_locked(quality: &str, is_pro: bool) -> bool {
    if is_pro {
        return false;
    }
    !FREE_QUALITIES.iter().any(|q| q.as_str() == quality)
}

/// 音频格式是否被锁定：只有 m4a 需要 Pro
pub fn is_audio_format_locked(format: AudioFormat, is_pro: bool) -> bool {
    !is_pro && format == AudioFormat::M4a
}
