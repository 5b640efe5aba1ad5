// Result Collector - 結果収集機能

use crate::core::TaskResult;
use anyhow::Result;
use tokio::sync::mpsc;

/// Collector: 結果キューを排出して完了順の列を構築
///
/// キューが閉じられて空になった（recvがNoneを返した）時点で停止する。
/// 並び順は受信順＝完了順であり、タスクid順ではない
pub fn spawn_result_collector(
    mut result_rx: mpsc::Receiver<TaskResult>,
) -> tokio::task::JoinHandle<Result<Vec<TaskResult>>> {
    tokio::spawn(async move {
        let mut results = Vec::new();

        while let Some(result) = result_rx.recv().await {
            results.push(result);
        }

        Ok(results)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(worker_id: usize, task_id: usize) -> TaskResult {
        TaskResult {
            worker_id,
            task_id,
            payload: format!("data-{task_id}"),
        }
    }

    #[tokio::test]
    async fn test_collector_accumulates_in_arrival_order() {
        let (result_tx, result_rx) = mpsc::channel::<TaskResult>(10);

        let collector_handle = spawn_result_collector(result_rx);

        // 完了順はタスクid順とは限らない
        result_tx.send(sample_result(2, 3)).await.unwrap();
        result_tx.send(sample_result(1, 1)).await.unwrap();
        result_tx.send(sample_result(3, 2)).await.unwrap();

        drop(result_tx); // チャンネル終了

        let results = collector_handle.await.unwrap().unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].task_id, 3);
        assert_eq!(results[1].task_id, 1);
        assert_eq!(results[2].task_id, 2);
    }

    #[tokio::test]
    async fn test_collector_empty_channel() {
        let (result_tx, result_rx) = mpsc::channel::<TaskResult>(1);

        let collector_handle = spawn_result_collector(result_rx);

        // 何も送信せずにチャンネルを閉じる
        drop(result_tx);

        let results = collector_handle.await.unwrap().unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_collector_drains_buffered_results_after_close() {
        let (result_tx, result_rx) = mpsc::channel::<TaskResult>(10);

        // 先にバッファへ積んでからクローズし、その後でCollectorを起動
        for id in 1..=4 {
            result_tx.send(sample_result(1, id)).await.unwrap();
        }
        drop(result_tx);

        let collector_handle = spawn_result_collector(result_rx);
        let results = collector_handle.await.unwrap().unwrap();

        // クローズ後も残っていた結果は全て排出される
        assert_eq!(results.len(), 4);
    }
}
