// task_fanout - 固定バッチのタスクを固定数のワーカーで並列処理し、
// 完了順に収集した結果を一括レポートする最小のfan-out/fan-inパイプライン

pub mod core;
pub mod engine;
pub mod services;

pub use crate::core::{PipelineError, PipelineResult, PipelineSummary, Task, TaskResult};
pub use crate::engine::TaskPipeline;
pub use crate::services::{
    ConsoleEventLogger, DefaultPipelineConfig, NoOpEventLogger, SimulatedProcessor,
};
