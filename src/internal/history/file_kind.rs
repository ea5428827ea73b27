use std::path::Path;

/// 按扩展名粗分的文件类型，用于列表图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Video,
    Audio,
    Other,
}

const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mkv", "avi"];
const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "m4a", "wav", "ogg", "flac"];

impl FileKind {
    /// 扩展名不区分大小写
    pub fn from_filename(filename: &str) -> Self {
        let Some(ext) = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
        else {
            return FileKind::Other;
        };

        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Video
        } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Audio
        } else {
            FileKind::Other
        }
    }
}
