// パイプラインで扱うデータ型定義

/// 処理対象の単一タスク
///
/// Task Sourceがid昇順（1..=N）で生成し、キューを経由して
/// ちょうど1つのワーカーへ所有権が移る
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: usize,
    pub payload: String,
}

impl Task {
    /// idから決定的なペイロードを持つタスクを作成
    pub fn new(id: usize) -> Self {
        Self {
            id,
            payload: format!("data-{id}"),
        }
    }
}

/// 単一タスクの処理結果
///
/// どのワーカーが処理したかを記録する。収集順は完了順であり、
/// タスクid順の保証はない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResult {
    pub worker_id: usize,
    pub task_id: usize,
    pub payload: String,
}

/// パイプライン全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    pub total_tasks: usize,
    pub processed_tasks: usize,
    pub total_time_ms: u64,
    pub average_time_per_task_ms: f64,
    /// 完了順に並んだ全結果
    pub results: Vec<TaskResult>,
}
