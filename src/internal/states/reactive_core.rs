//! # ReactiveProperty：响应式属性内核
//!
//! 控制器和下载历史对外发布的状态（任务阶段、任务状态、视频信息等）都放在这里。
//! 读取当前值不阻塞；`watch()` 得到的监听器可以异步等待下一次变化，
//! 也可以用 [`PropertyWatcher::wait_until`] 挂起直到满足条件。
//!
//! 所有克隆共享同一个 `watch::Sender`，最后一个克隆销毁时监听器会收到
//! [`ReactivePropertyError::Destroyed`]。

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

// ──────────────────────────── Error ────────────────────────────

/// 响应式属性统一错误类型
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 属性已被销毁（所有持有者都已释放）
    #[error("属性已被销毁")]
    Destroyed,
}

// ──────────────────────────── ReactiveProperty ────────────────────────────

/// 响应式属性：new / update / update_field / get_current / watch。
#[derive(Debug)]
pub struct ReactiveProperty<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for ReactiveProperty<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    /// 创建一个新的响应式属性。
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(value);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// 整体替换属性值，所有监听者都会收到通知。
    ///
    /// 没有监听者时同样会写入，之后的 `get_current` 能读到新值。
    pub fn update(&self, new_value: T) {
        self.sender.send_replace(new_value);
    }

    /// 使用闭包原地修改属性的部分字段。
    pub fn update_field<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        self.sender.send_modify(updater);
    }

    /// 获取当前属性值的快照（会 clone）。
    pub fn get_current(&self) -> T {
        self.sender.borrow().clone()
    }

    /// 对当前值应用转换函数，只借用不 clone。
    ///
    /// ```rust,no_run
    /// use sjtube_client::states::ReactiveProperty;
    ///
    /// let prop = ReactiveProperty::new(vec![1, 2, 3]);
    /// let len = prop.map(|v| v.len()); // 3
    /// ```
    pub fn map<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.sender.borrow())
    }

    /// 创建一个监听器，用于异步监听属性值的变化。
    ///
    /// 新建的监听器把当前值视为“已读”，只有之后的更新才会触发 `changed`。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.sender.subscribe(),
        }
    }
}

// ──────────────────────────── PropertyWatcher ────────────────────────────

/// 属性监听器，用于异步接收属性值的变化。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<T>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 异步等待属性值的变化，返回新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver
            .changed()
            .await
            .map_err(|_| ReactivePropertyError::Destroyed)?;
        Ok(self.receiver.borrow_and_update().clone())
    }

    /// 同步获取当前值的克隆。
    pub fn borrow(&self) -> T {
        self.receiver.borrow().clone()
    }

    /// 挂起直到值满足 `predicate`；当前值已满足时立即返回。
    pub async fn wait_until<F>(
        &mut self,
        predicate: F,
    ) -> Result<T, ReactivePropertyError>
    where
        F: FnMut(&T) -> bool,
    {
        self.receiver
            .wait_for(predicate)
            .await
            .map(|value| value.clone())
            .map_err(|_| ReactivePropertyError::Destroyed)
    }
}
