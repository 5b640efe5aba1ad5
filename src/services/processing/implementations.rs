// タスク処理の具象実装

use crate::core::{Task, TaskProcessor, TaskResult};
use async_trait::async_trait;
use std::time::Duration;

/// 可変コストの処理をシミュレートする実装
///
/// 遅延はタスクidから決定的に導出される:
/// latency = base_ms + (id mod 5) * step_ms
/// 実際のI/Oではなく、コストが揺れる処理の代役
#[derive(Debug, Clone)]
pub struct SimulatedProcessor {
    base_ms: u64,
    step_ms: u64,
}

impl SimulatedProcessor {
    pub fn new(base_ms: u64, step_ms: u64) -> Self {
        Self { base_ms, step_ms }
    }

    /// 遅延なしの実装（テスト用）
    pub fn instant() -> Self {
        Self {
            base_ms: 0,
            step_ms: 0,
        }
    }

    fn latency_for(&self, task_id: usize) -> Duration {
        Duration::from_millis(self.base_ms + (task_id as u64 % 5) * self.step_ms)
    }
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self {
            base_ms: 100,
            step_ms: 50,
        }
    }
}

#[async_trait]
impl TaskProcessor for SimulatedProcessor {
    async fn process(&self, worker_id: usize, task: &Task) -> TaskResult {
        let latency = self.latency_for(task.id);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        TaskResult {
            worker_id,
            task_id: task.id,
            payload: task.payload.clone(),
        }
    }
}
