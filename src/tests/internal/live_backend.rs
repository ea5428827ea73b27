//! 真实后端冒烟测试：需要 `src/tests/env/backend.env` 中的 `SJTUBE_API_URL`，缺失时跳过。

use std::sync::Arc;

use crate::backend::TubeBackend;
use crate::history::DownloadHistory;
use crate::tests::{init_tracing, load_backend_optional};

#[tokio::test]
async fn live_history_listing() {
    init_tracing();
    let Some(auth) = load_backend_optional() else {
        return;
    };

    let history = DownloadHistory::new(Arc::new(auth));
    match history.refresh().await {
        Ok(items) => {
            for item in &items {
                println!("{}  {}  {}", item.filename, item.size_human, item.modified);
            }
        }
        Err(e) => eprintln!("拉取历史失败（可检查 env）：{}", e),
    }
}

#[tokio::test]
async fn live_rejects_unknown_task() {
    init_tracing();
    let Some(auth) = load_backend_optional() else {
        return;
    };

    match auth.task_status("definitely-not-a-task").await {
        Ok(status) => panic!("unexpected status: {:?}", status),
        Err(e) => println!("预期的错误：{} (status = {:?})", e, e.status()),
    }
}
