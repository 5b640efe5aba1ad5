// ワーカーイベント報告の具象実装

use crate::core::WorkerEventLogger;
use async_trait::async_trait;
use chrono::{Local, SecondsFormat};

/// コンソール出力によるイベント報告実装
///
/// 各行に壁時計のRFC3339タイムスタンプを付与する。
/// 複数ワーカーからの行が交互に出力されても構わない
#[derive(Debug, Default, Clone)]
pub struct ConsoleEventLogger {
    quiet: bool,
}

impl ConsoleEventLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    fn timestamp() -> String {
        Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[async_trait]
impl WorkerEventLogger for ConsoleEventLogger {
    async fn worker_started(&self, worker_id: usize) {
        if !self.quiet {
            println!("{} worker {worker_id} started", Self::timestamp());
        }
    }

    async fn task_completed(&self, worker_id: usize, task_id: usize) {
        if !self.quiet {
            println!(
                "{} worker {worker_id} completed task {task_id}",
                Self::timestamp()
            );
        }
    }

    async fn worker_finished(&self, worker_id: usize) {
        if !self.quiet {
            println!("{} worker {worker_id} finished", Self::timestamp());
        }
    }
}

/// 何もしないイベント報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpEventLogger;

impl NoOpEventLogger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WorkerEventLogger for NoOpEventLogger {
    async fn worker_started(&self, _worker_id: usize) {
        // 何もしない
    }

    async fn task_completed(&self, _worker_id: usize, _task_id: usize) {
        // 何もしない
    }

    async fn worker_finished(&self, _worker_id: usize) {
        // 何もしない
    }
}
