use anyhow::Result;
use chrono::{Local, SecondsFormat};

use task_fanout::{services::print_report, DefaultPipelineConfig, TaskPipeline};

/// ワーカー数（起動時定数）
const WORKER_COUNT: usize = 4;

/// タスク数（起動時定数）
const TASK_COUNT: usize = 20;

#[tokio::main]
async fn main() -> Result<()> {
    let pipeline = TaskPipeline::with_defaults();
    let config = DefaultPipelineConfig::new(WORKER_COUNT, TASK_COUNT);

    // パイプライン実行 - ログ行はワーカーから逐次出力される
    let summary = pipeline.execute(&config).await?;

    // 全ワーカー終了後に結果を一括表示
    print_report(&summary.results);

    println!(
        "{} done. processed={} tasks",
        Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        summary.processed_tasks
    );

    Ok(())
}
