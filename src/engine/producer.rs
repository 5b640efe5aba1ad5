// Task Source - タスク生成と投入機能

use crate::core::Task;
use anyhow::Result;
use tokio::sync::mpsc;

/// タスク数Nからid昇順（1..=N）のタスク列を生成
///
/// ペイロードはidから決定的に導出される
pub fn generate_tasks(task_count: usize) -> Vec<Task> {
    (1..=task_count).map(Task::new).collect()
}

/// Task Source: タスクをワークキューへ投入
///
/// 全件送信後にSenderをドロップすることで「これ以上タスクは来ない」
/// というクローズシグナルになる
pub fn spawn_producer(
    tasks: Vec<Task>,
    work_tx: mpsc::Sender<Task>,
) -> tokio::task::JoinHandle<Result<()>> {
    tokio::spawn(async move {
        for task in tasks {
            if (work_tx.send(task).await).is_err() {
                // チャンネルが閉じられた場合は正常終了
                break;
            }
        }
        // work_txをドロップしてチャンネル終了シグナル
        Ok(())
    })
}
