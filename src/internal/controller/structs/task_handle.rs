use std::future::Future;

use tokio::task::JoinHandle;

/// 后台任务句柄：释放时中止任务
///
/// 防抖定时器和轮询循环都由它持有；替换、清空或随控制器一起销毁时任务立即停止。
#[derive(Debug)]
pub struct TaskHandle {
    handle: JoinHandle<()>,
}

impl TaskHandle {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// 任务是否已经结束（正常返回或被中止）
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    /// 中止并等待任务真正退出
    pub async fn stop(mut self) {
        self.handle.abort();
        let _ = (&mut self.handle).await;
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
