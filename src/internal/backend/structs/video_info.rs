use serde::{Deserialize, Serialize};

/// 校验接口返回的视频元数据，只对当前输入的 URL 有效。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    pub channel: String,
    #[serde(default)]
    pub duration: Option<f64>, // 秒
    #[serde(default)]
    pub duration_string: Option<String>, // 后端格式化好的时长，如 "3:45"
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub is_playlist: bool,
    #[serde(default)]
    pub playlist_count: Option<u64>,
}

impl VideoInfo {
    /// 友好化的播放量，如 `1.2M views`；没有或为 0 时返回 `None`。
    pub fn views_display(&self) -> Option<String> {
        let n = self.view_count.filter(|&n| n > 0)?;
        let text = if n >= 1_000_000 {
            format!("{:.1}M views", n as f64 / 1_000_000.0)
        } else if n >= 1_000 {
            format!("{:.1}K views", n as f64 / 1_000.0)
        } else {
            format!("{} views", n)
        };
        Some(text)
    }
}

/// `POST /api/validate` 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(default)]
    pub info: Option<VideoInfo>,
    #[serde(default)]
    pub error: Option<String>,
}
