//! 已完成文件列表：拉取、删除、另存为。

pub mod download_history;
pub mod file_kind;
