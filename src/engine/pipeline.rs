// Pipeline - Fan-out/Fan-inパイプライン
// メインパイプライン機能とオーケストレーション

use super::{
    collector::spawn_result_collector,
    producer::{generate_tasks, spawn_producer},
    worker::spawn_workers,
};
use crate::{
    core::{
        PipelineConfig, PipelineError, PipelineResult, PipelineSummary, Task, TaskProcessor,
        TaskResult, WorkerEventLogger,
    },
    services::{ConsoleEventLogger, NoOpEventLogger, SimulatedProcessor},
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 責任が明確に分離されたパイプライン
///
/// Task Source → Worker Pool → Completion Watcher → Result Collector
/// を線形に構成する
pub struct TaskPipeline<P, E> {
    processor: Arc<P>,
    logger: Arc<E>,
}

impl TaskPipeline<SimulatedProcessor, ConsoleEventLogger> {
    /// デフォルト構成のパイプラインを作成（シミュレート処理＋コンソール出力）
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(SimulatedProcessor::default()),
            Arc::new(ConsoleEventLogger::new()),
        )
    }
}

impl TaskPipeline<SimulatedProcessor, NoOpEventLogger> {
    /// 静音版のパイプラインを作成（テスト・バックグラウンド処理用）
    pub fn quiet() -> Self {
        Self::new(
            Arc::new(SimulatedProcessor::instant()),
            Arc::new(NoOpEventLogger::new()),
        )
    }
}

impl<P, E> TaskPipeline<P, E>
where
    P: TaskProcessor + 'static,
    E: WorkerEventLogger + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(processor: Arc<P>, logger: Arc<E>) -> Self {
        Self { processor, logger }
    }

    /// 固定バッチのタスクを固定数のワーカーで処理
    pub async fn execute<C>(&self, config: &C) -> PipelineResult<PipelineSummary>
    where
        C: PipelineConfig,
    {
        let worker_count = config.worker_count();
        let task_count = config.task_count();

        // 設定検証
        if worker_count == 0 {
            return Err(PipelineError::configuration(
                "ワーカー数は1以上である必要があります",
            ));
        }

        let start_time = Instant::now();

        // Producer-Consumerチャンネル構築
        // ワークキューはタスク数以上の容量を保証し、投入はブロックしない。
        // 結果キューは設定されたバッファサイズに従い、満杯時は送信側が待つ
        let work_buffer = config.channel_buffer_size().max(task_count).max(1);
        let result_buffer = config.channel_buffer_size().max(1);
        let (work_tx, work_rx) = mpsc::channel::<Task>(work_buffer);
        let (result_tx, result_rx) = mpsc::channel::<TaskResult>(result_buffer);

        // Worker Pool起動 - 投入開始との順序はキューがバッファするため不問
        let worker_handles = spawn_workers(
            Arc::clone(&self.processor),
            work_rx,
            result_tx.clone(),
            Arc::clone(&self.logger),
            worker_count,
            config.enable_event_logging(),
        );

        // Task Source起動
        let producer_handle = spawn_producer(generate_tasks(task_count), work_tx);

        // Result Collector起動
        // Completion Watcherと並行して排出し続けることでデッドロックを防ぐ
        let collector_handle = spawn_result_collector(result_rx);

        // Producer完了を待機
        producer_handle.await??;

        // Completion Watcher: 全ワーカーの終了を待機（join/barrier）
        for handle in worker_handles {
            handle.await??;
        }

        // 全ワーカー終了を確認後、result_txをドロップして結果キューを閉じる
        drop(result_tx);

        // Collector完了を待機
        let results = collector_handle.await??;

        let total_time_ms = start_time.elapsed().as_millis() as u64;
        let average_time_per_task_ms = if task_count > 0 {
            total_time_ms as f64 / task_count as f64
        } else {
            0.0
        };

        Ok(PipelineSummary {
            total_tasks: task_count,
            processed_tasks: results.len(),
            total_time_ms,
            average_time_per_task_ms,
            results,
        })
    }
}
