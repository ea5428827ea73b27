use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 下载模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadMode {
    Video,
    Audio,
}

/// 视频清晰度，取值固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "144")]
    P144,
    #[serde(rename = "270")]
    P270,
    #[default]
    #[serde(rename = "360")]
    P360,
    #[serde(rename = "480")]
    P480,
    #[serde(rename = "720")]
    P720,
    #[serde(rename = "1080")]
    P1080,
    #[serde(rename = "best")]
    Best,
}

impl Quality {
    /// 全部清晰度，按界面展示顺序
    pub const ALL: [Quality; 7] = [
        Quality::P144,
        Quality::P270,
        Quality::P360,
        Quality::P480,
        Quality::P720,
        Quality::P1080,
        Quality::Best,
    ];

    /// 线上取值，如 `"720"`、`"best"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::P144 => "144",
            Quality::P270 => "270",
            Quality::P360 => "360",
            Quality::P480 => "480",
            Quality::P720 => "720",
            Quality::P1080 => "1080",
            Quality::Best => "best",
        }
    }

    /// 展示名，如 `"720p"`、`"Best"`
    pub fn label(&self) -> &'static str {
        match self {
            Quality::P144 => "144p",
            Quality::P270 => "270p",
            Quality::P360 => "360p",
            Quality::P480 => "480p",
            Quality::P720 => "720p",
            Quality::P1080 => "1080p",
            Quality::Best => "Best",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quality {
    type Err = String;

    /// 接受 `"720"` 和 `"720p"` 两种写法，大小写不敏感
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let normalized = normalized.strip_suffix('p').unwrap_or(&normalized);
        Quality::ALL
            .into_iter()
            .find(|q| q.as_str() == normalized)
            .ok_or_else(|| format!("未知清晰度: {}", s))
    }
}

/// 音频格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    M4a,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::M4a => "m4a",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp3" => Ok(AudioFormat::Mp3),
            "m4a" => Ok(AudioFormat::M4a),
            _ => Err(format!("未知音频格式: {}", s)),
        }
    }
}

/// 一次下载请求，提交后不再修改。
///
/// 序列化结果就是 `POST /api/download` 的请求体：
/// `{url, mode, quality, audio_format}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    pub mode: DownloadMode,
    pub quality: Quality,
    pub audio_format: AudioFormat,
}

impl DownloadRequest {
    pub fn video(url: impl Into<String>, quality: Quality) -> Self {
        Self {
            url: url.into(),
            mode: DownloadMode::Video,
            quality,
            audio_format: AudioFormat::default(),
        }
    }

    pub fn audio(url: impl Into<String>, audio_format: AudioFormat) -> Self {
        Self {
            url: url.into(),
            mode: DownloadMode::Audio,
            quality: Quality::Best,
            audio_format,
        }
    }

    /// 实际发给后端的请求：去掉 URL 首尾空白，音频模式清晰度固定为 `best`。
    pub fn to_wire(&self) -> Self {
        Self {
            url: self.url.trim().to_string(),
            mode: self.mode,
            quality: match self.mode {
                DownloadMode::Video => self.quality,
                DownloadMode::Audio => Quality::Best,
            },
            audio_format: self.audio_format,
        }
    }
}

/// `POST /api/download` 的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadStartResponse {
    pub task_id: String,
    #[serde(default)]
    pub message: String,
}
