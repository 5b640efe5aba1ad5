// エンジン層 - 並列実行とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod collector;
pub mod pipeline;
pub mod producer;
pub mod worker;

// 公開API - 主要エンジンクラス
pub use collector::spawn_result_collector;
pub use pipeline::TaskPipeline;
pub use producer::{generate_tasks, spawn_producer};
pub use worker::{spawn_single_worker, spawn_workers};
