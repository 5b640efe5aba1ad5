// Worker Pool - 並列ワーカー機能

use crate::core::{Task, TaskProcessor, TaskResult, WorkerEventLogger};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 単一ワーカー
///
/// ワークキューからタスクを取り出して処理し、結果キューへ送る。
/// キューが閉じられて空になった時点でクリーンに終了する。
/// 各タスクはちょうど1つのワーカーが消費する（共有Receiverのロックが保証）。
/// events_enabledがfalseの場合、イベント報告は一切行わない
pub fn spawn_single_worker<P, E>(
    worker_id: usize,
    processor: Arc<P>,
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<Task>>>,
    result_tx: mpsc::Sender<TaskResult>,
    logger: Arc<E>,
    events_enabled: bool,
) -> tokio::task::JoinHandle<Result<()>>
where
    P: TaskProcessor + 'static,
    E: WorkerEventLogger + 'static,
{
    tokio::spawn(async move {
        if events_enabled {
            logger.worker_started(worker_id).await;
        }

        loop {
            // 次の作業を取得
            let task = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(task) => task,
                    None => break, // キューが閉じられて空
                }
            };

            // 単一タスク処理 - 失敗モードは存在しない
            let result = processor.process(worker_id, &task).await;
            let task_id = result.task_id;

            // 結果送信 - 結果キューが満杯ならここでブロック（バックプレッシャー）
            if (result_tx.send(result).await).is_err() {
                // 結果チャンネルが閉じられた場合は終了
                break;
            }

            if events_enabled {
                logger.task_completed(worker_id, task_id).await;
            }
        }

        if events_enabled {
            logger.worker_finished(worker_id).await;
        }
        Ok(())
    })
}

/// Worker Pool: 固定数の並列ワーカーを起動
///
/// ワーカーidは1..=Wを割り当てる。全ワーカーが同一のワークキューを
/// 共有し、タスクの取り合い順序に公平性の保証はない
pub fn spawn_workers<P, E>(
    processor: Arc<P>,
    work_rx: mpsc::Receiver<Task>,
    result_tx: mpsc::Sender<TaskResult>,
    logger: Arc<E>,
    worker_count: usize,
    events_enabled: bool,
) -> Vec<tokio::task::JoinHandle<Result<()>>>
where
    P: TaskProcessor + 'static,
    E: WorkerEventLogger + 'static,
{
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));
    let mut handles = Vec::new();

    for worker_id in 1..=worker_count {
        let handle = spawn_single_worker(
            worker_id,
            Arc::clone(&processor),
            Arc::clone(&work_rx),
            result_tx.clone(),
            Arc::clone(&logger),
            events_enabled,
        );
        handles.push(handle);
    }

    handles
}
