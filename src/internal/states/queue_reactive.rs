//! # QueueReactiveProperty：微队列响应式属性
//!
//! 基于 `tokio::sync::mpsc` 的单向消息队列，控制器用它向界面投递提示消息
//! （相当于前端的 toast）。
//!
//! - 严格 FIFO，生产者可以 Clone，消费者只有一个
//! - 同时维护一个“最近一条消息”的响应式属性，便于只关心最新提示的订阅者

use tokio::sync::mpsc;

use super::reactive_core::{PropertyWatcher, ReactiveProperty};

/// 微队列响应式属性（生产者端）
#[derive(Clone, Debug)]
pub struct QueueReactiveProperty<T: Clone + Send + Sync + 'static> {
    sender: mpsc::UnboundedSender<T>,
    latest: ReactiveProperty<Option<T>>,
}

/// 微队列消费者，不可 Clone，按 FIFO 顺序消费消息。
#[derive(Debug)]
pub struct QueueReactiveConsumer<T: Clone + Send + Sync + 'static> {
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> QueueReactiveProperty<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// 创建队列，返回 (生产者, 消费者)。
    pub fn new() -> (Self, QueueReactiveConsumer<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let producer = Self {
            sender,
            latest: ReactiveProperty::new(None),
        };
        (producer, QueueReactiveConsumer { receiver })
    }

    /// 发送消息；消费者已销毁时消息被丢弃，但“最近一条”仍会更新。
    pub fn send(&self, value: T) {
        self.latest.update(Some(value.clone()));
        let _ = self.sender.send(value);
    }

    /// 最近一条消息
    pub fn latest(&self) -> Option<T> {
        self.latest.get_current()
    }

    /// 订阅“最近一条消息”的变化（只读）。
    pub fn watch(&self) -> PropertyWatcher<Option<T>> {
        self.latest.watch()
    }
}

impl<T> QueueReactiveConsumer<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// 异步接收下一条消息；发送端全部关闭后返回 `None`。
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// 非阻塞接收，队列为空时返回 `None`。
    pub fn try_recv(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// 取出当前队列中积压的全部消息。
    pub fn drain(&mut self) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(value) = self.receiver.try_recv() {
            out.push(value);
        }
        out
    }
}
