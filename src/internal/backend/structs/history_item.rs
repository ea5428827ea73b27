use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /api/history` 列表中的一项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub filename: String,
    pub size: u64,
    pub size_human: String,
    pub modified: String, // ISO 8601，后端可能不带时区
    pub download_url: String,
}

impl HistoryItem {
    /// 解析 `modified`；不带时区时按 UTC 处理，无法解析时返回 `None`。
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.modified.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// 扩展名（大写），如 `MP4`；没有扩展名时为空串
    pub fn extension_label(&self) -> String {
        std::path::Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_uppercase())
            .unwrap_or_default()
    }
}
