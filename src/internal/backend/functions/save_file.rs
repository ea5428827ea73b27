//! 把已完成文件流式保存到本地目录（`GET /downloads/{filename}`）。

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::header::{HeaderValue, ACCEPT};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use super::response::ensure_success;
use crate::internal::backend::structs::{ApiError, BackendAuth};

/// 临时文件后缀，写完后再重命名
const PART_SUFFIX: &str = ".part";

/// 本地保存时使用的文件名：只取最后一段，去掉任何目录成分
pub fn local_file_name(filename: &str) -> Result<String, ApiError> {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::trim)
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
        .ok_or_else(|| ApiError::InvalidFilename(filename.to_string()))?;
    Ok(name.to_string())
}

/// 下载 `filename` 到 `dest_dir`，返回最终路径。
///
/// 先写入 `{name}.part`，完成后重命名；中途失败会删除临时文件。
pub async fn save_file(
    auth: &BackendAuth,
    filename: &str,
    dest_dir: &Path,
) -> Result<PathBuf, ApiError> {
    let name = local_file_name(filename)?;
    let target = auth.download_url(filename)?;
    let final_path = dest_dir.join(&name);
    let part_path = dest_dir.join(format!("{}{}", name, PART_SUFFIX));

    let res = auth
        .client
        .get(target)
        .header(ACCEPT, HeaderValue::from_static("*/*"))
        .send()
        .await?;
    let res = ensure_success(res).await?;

    debug!(filename, path = %part_path.display(), "saving file");
    let written = match write_stream(res, &part_path).await {
        Ok(n) => n,
        Err(e) => {
            let _ = tokio::fs::remove_file(&part_path).await;
            return Err(e);
        }
    };

    tokio::fs::rename(&part_path, &final_path)
        .await
        .map_err(ApiError::WriteFile)?;

    info!(filename, bytes = written, path = %final_path.display(), "file saved");
    Ok(final_path)
}

async fn write_stream(
    res: reqwest::Response,
    path: &Path,
) -> Result<u64, ApiError> {
    let mut file = File::create(path).await.map_err(ApiError::CreateFile)?;
    let mut stream = res.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk: bytes::Bytes = chunk?;
        file.write_all(&chunk).await.map_err(ApiError::WriteFile)?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(ApiError::WriteFile)?;
    Ok(written)
}
