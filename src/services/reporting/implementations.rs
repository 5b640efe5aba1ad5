// 結果レポートの具象実装

use crate::core::TaskResult;

/// レポートブロックのヘッダー行
pub const REPORT_HEADER: &str = "=== PROCESSED TASKS RESULTS ===";

/// レポートブロックのフッター行
pub const REPORT_FOOTER: &str = "=== END OF RESULTS ===";

/// 収集済み結果を固定フォーマットのブロックに整形
///
/// 1行目にヘッダー、結果1件につき1行、最後にフッター。
/// 結果の並びは収集順（＝完了順）をそのまま反映する
pub fn render_report(results: &[TaskResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 2);
    lines.push(REPORT_HEADER.to_string());
    for result in results {
        lines.push(format!(
            "worker={}, task={}, payload='{}'",
            result.worker_id, result.task_id, result.payload
        ));
    }
    lines.push(REPORT_FOOTER.to_string());
    lines.join("\n")
}

/// レポートブロックを標準出力へ書き出す
pub fn print_report(results: &[TaskResult]) {
    println!();
    println!("{}", render_report(results));
    println!();
}
