// 並列パイプラインのトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::{Task, TaskResult};
use async_trait::async_trait;
use mockall::automock;

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// 投入するタスク数を取得
    fn task_count(&self) -> usize;

    /// チャンネルバッファサイズを取得
    ///
    /// パイプライン側でタスク数以上に引き上げられるため、
    /// このワークロードでは投入がブロックすることはない
    fn channel_buffer_size(&self) -> usize;

    /// ワーカーイベントログを有効にするかどうか
    fn enable_event_logging(&self) -> bool;
}

// PipelineConfig for Box<dyn PipelineConfig>
impl PipelineConfig for Box<dyn PipelineConfig> {
    fn worker_count(&self) -> usize {
        self.as_ref().worker_count()
    }

    fn task_count(&self) -> usize {
        self.as_ref().task_count()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }

    fn enable_event_logging(&self) -> bool {
        self.as_ref().enable_event_logging()
    }
}

/// タスク処理の抽象化トレイト
///
/// シミュレートされた遅延は本来の処理のプレースホルダーであり、
/// 差し替え可能な処理関数として扱う。処理は常に成功する
#[automock]
#[async_trait]
pub trait TaskProcessor: Send + Sync {
    /// 単一タスクを処理して結果を生成
    async fn process(&self, worker_id: usize, task: &Task) -> TaskResult;
}

// TaskProcessor for Box<dyn TaskProcessor>
#[async_trait]
impl TaskProcessor for Box<dyn TaskProcessor> {
    async fn process(&self, worker_id: usize, task: &Task) -> TaskResult {
        self.as_ref().process(worker_id, task).await
    }
}

/// ワーカーイベント報告の抽象化トレイト
///
/// ログは副次的なチャンネルであり、データの正しさには影響しない。
/// 複数のワーカーから同時に呼ばれても安全であること
#[automock]
#[async_trait]
pub trait WorkerEventLogger: Send + Sync {
    /// ワーカー起動時の報告
    async fn worker_started(&self, worker_id: usize);

    /// タスク完了時の報告
    async fn task_completed(&self, worker_id: usize, task_id: usize);

    /// ワーカー終了時の報告
    async fn worker_finished(&self, worker_id: usize);
}

// WorkerEventLogger for Box<dyn WorkerEventLogger>
#[async_trait]
impl WorkerEventLogger for Box<dyn WorkerEventLogger> {
    async fn worker_started(&self, worker_id: usize) {
        self.as_ref().worker_started(worker_id).await
    }

    async fn task_completed(&self, worker_id: usize, task_id: usize) {
        self.as_ref().task_completed(worker_id, task_id).await
    }

    async fn worker_finished(&self, worker_id: usize) {
        self.as_ref().worker_finished(worker_id).await
    }
}
