//! 响应式属性测试：ReactiveProperty 读写与监听、`wait_until`、销毁唤醒，以及提示队列。
//!
//! 测试项：
//! - 基础读写、watch 监听
//! - `wait_until` 条件等待（立即满足 / 异步等待 / 销毁唤醒）
//! - 多任务并发写
//! - QueueReactiveProperty 的 FIFO 与“最近一条”

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::states::{
    QueueReactiveProperty, ReactiveProperty, ReactivePropertyError,
};

// ═══════════════════════════ ReactiveProperty ═══════════════════════════

#[tokio::test]
async fn basic_update_and_read() {
    let prop = ReactiveProperty::new(0u64);
    prop.update(42);
    assert_eq!(prop.get_current(), 42);

    prop.update_field(|v| *v += 8);
    assert_eq!(prop.get_current(), 50);
    assert_eq!(prop.map(|v| v * 2), 100);
}

#[tokio::test]
async fn watch_receives_updates() {
    let prop = ReactiveProperty::new(0i32);
    let mut watcher = prop.watch();

    prop.update(1);
    assert_eq!(watcher.changed().await.unwrap(), 1);

    prop.update(2);
    assert_eq!(watcher.changed().await.unwrap(), 2);
    assert_eq!(watcher.borrow(), 2);
}

#[tokio::test]
async fn clones_share_state() {
    let prop = ReactiveProperty::new(String::from("a"));
    let other = prop.clone();
    other.update("b".to_string());
    assert_eq!(prop.get_current(), "b");
}

#[tokio::test]
async fn wait_until_already_satisfied() {
    let prop = ReactiveProperty::new(100i32);
    let mut watcher = prop.watch();
    // 当前值已满足，应立即返回
    assert_eq!(watcher.wait_until(|v| *v == 100).await.unwrap(), 100);
}

#[tokio::test]
async fn wait_until_async_satisfied() {
    let prop = ReactiveProperty::new(0i32);
    let p = prop.clone();
    let mut watcher = prop.watch();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        p.update(1);
        tokio::time::sleep(Duration::from_millis(50)).await;
        p.update(42);
    });

    assert_eq!(watcher.wait_until(|v| *v == 42).await.unwrap(), 42);
    assert_eq!(prop.get_current(), 42);
}

#[tokio::test]
async fn destroyed_property_wakes_watchers() {
    let prop = ReactiveProperty::new(0u8);
    let mut watcher = prop.watch();

    let handle = tokio::spawn(async move { watcher.wait_until(|v| *v == 9).await });
    tokio::time::sleep(Duration::from_millis(20)).await;
    drop(prop);

    let result = handle.await.unwrap();
    assert!(matches!(result, Err(ReactivePropertyError::Destroyed)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_update_field() {
    let prop = ReactiveProperty::new(0u64);
    let tasks = 8;
    let per_task = 1_000;

    let handles: Vec<_> = (0..tasks)
        .map(|_| {
            let p = prop.clone();
            tokio::spawn(async move {
                for _ in 0..per_task {
                    p.update_field(|v| *v += 1);
                }
            })
        })
        .collect();
    for h in handles {
        h.await.unwrap();
    }

    assert_eq!(prop.get_current(), tasks * per_task);
}

/// wait_until 唤醒延迟，只做宽松上限断言
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn wait_until_latency() {
    let prop = ReactiveProperty::new(0u64);
    let woke_at = Arc::new(AtomicU64::new(0));
    let start = Instant::now();

    let mut watcher = prop.watch();
    let flag = woke_at.clone();
    let waiter = tokio::spawn(async move {
        watcher.wait_until(|v| *v == 1).await.unwrap();
        flag.store(start.elapsed().as_micros() as u64, Ordering::SeqCst);
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    let sent = start.elapsed().as_micros() as u64;
    prop.update(1);
    waiter.await.unwrap();

    let latency = woke_at.load(Ordering::SeqCst).saturating_sub(sent);
    println!("wait_until 唤醒延迟: {} µs", latency);
    assert!(latency < 1_000_000);
}

// ═══════════════════════════ QueueReactiveProperty ═══════════════════════════

#[tokio::test]
async fn queue_is_fifo_and_tracks_latest() {
    let (queue, mut consumer) = QueueReactiveProperty::new();
    assert_eq!(queue.latest(), None);

    let producer = queue.clone();
    producer.send("first");
    queue.send("second");
    queue.send("third");

    assert_eq!(queue.latest(), Some("third"));
    assert_eq!(consumer.recv().await, Some("first"));
    assert_eq!(consumer.drain(), vec!["second", "third"]);
    assert_eq!(consumer.try_recv(), None);
}

#[tokio::test]
async fn queue_survives_dropped_consumer() {
    let (queue, consumer) = QueueReactiveProperty::new();
    let mut watcher = queue.watch();
    drop(consumer);

    queue.send(7u32);
    assert_eq!(queue.latest(), Some(7));
    assert_eq!(watcher.changed().await.unwrap(), Some(7));
}

#[tokio::test]
async fn queue_consumer_ends_when_producers_drop() {
    let (queue, mut consumer) = QueueReactiveProperty::<u8>::new();
    queue.send(1);
    drop(queue);

    assert_eq!(consumer.recv().await, Some(1));
    assert_eq!(consumer.recv().await, None);
}
