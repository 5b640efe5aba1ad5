// エンドツーエンド統合テスト
use std::collections::HashSet;
use std::sync::Arc;

use task_fanout::{
    core::traits::MockTaskProcessor,
    services::{render_report, NoOpEventLogger},
    DefaultPipelineConfig, SimulatedProcessor, TaskPipeline, TaskResult,
};

#[tokio::test]
async fn test_full_pipeline_scenario() {
    // シナリオ: N=20, W=4
    let pipeline = TaskPipeline::quiet();
    let config = DefaultPipelineConfig::new(4, 20);

    let summary = pipeline.execute(&config).await.unwrap();

    // 最終的な件数はちょうど20
    assert_eq!(summary.total_tasks, 20);
    assert_eq!(summary.processed_tasks, 20);
    assert_eq!(summary.results.len(), 20);

    // タスクidの集合は{1..20}と完全一致
    let task_ids: HashSet<usize> = summary.results.iter().map(|r| r.task_id).collect();
    assert_eq!(task_ids, (1..=20).collect::<HashSet<usize>>());

    // 各結果の検証: ペイロードは投入時の値、ワーカーidは範囲内
    for result in &summary.results {
        assert_eq!(result.payload, format!("data-{}", result.task_id));
        assert!((1..=4).contains(&result.worker_id));
    }
}

#[tokio::test]
async fn test_report_block_from_pipeline_output() {
    let pipeline = TaskPipeline::quiet();
    let config = DefaultPipelineConfig::new(4, 20);

    let summary = pipeline.execute(&config).await.unwrap();
    let report = render_report(&summary.results);
    let lines: Vec<&str> = report.lines().collect();

    // ヘッダー1行 + 結果20行 + フッター1行
    assert_eq!(lines.len(), 22);
    assert_eq!(lines.first(), Some(&"=== PROCESSED TASKS RESULTS ==="));
    assert_eq!(lines.last(), Some(&"=== END OF RESULTS ==="));

    // ヘッダーとフッターはそれぞれちょうど1回だけ現れる
    assert_eq!(
        lines
            .iter()
            .filter(|l| l.contains("PROCESSED TASKS RESULTS"))
            .count(),
        1
    );
    assert_eq!(
        lines.iter().filter(|l| l.contains("END OF RESULTS")).count(),
        1
    );

    for line in &lines[1..21] {
        assert!(line.starts_with("worker="), "unexpected line: {line}");
    }
}

#[tokio::test]
async fn test_pipeline_with_simulated_latency() {
    // 実際の遅延付きでも全件が完了する（小さい値で実時間を抑える）
    let pipeline = TaskPipeline::new(
        Arc::new(SimulatedProcessor::new(1, 1)),
        Arc::new(NoOpEventLogger::new()),
    );
    let config = DefaultPipelineConfig::new(4, 10);

    let summary = pipeline.execute(&config).await.unwrap();

    assert_eq!(summary.processed_tasks, 10);
    let task_ids: HashSet<usize> = summary.results.iter().map(|r| r.task_id).collect();
    assert_eq!(task_ids, (1..=10).collect::<HashSet<usize>>());
}

#[tokio::test]
async fn test_pipeline_with_custom_processor() {
    // 処理関数は差し替え可能なシーム - モック実装でパイプラインを実行
    let mut mock_processor = MockTaskProcessor::new();
    mock_processor
        .expect_process()
        .times(5)
        .returning(|worker_id, task| TaskResult {
            worker_id,
            task_id: task.id,
            payload: task.payload.to_uppercase(),
        });

    let pipeline = TaskPipeline::new(Arc::new(mock_processor), Arc::new(NoOpEventLogger::new()));
    let config = DefaultPipelineConfig::new(2, 5);

    let summary = pipeline.execute(&config).await.unwrap();

    assert_eq!(summary.processed_tasks, 5);
    for result in &summary.results {
        assert_eq!(result.payload, format!("DATA-{}", result.task_id));
    }
}
