// 結果レポート機能
// 収集済み結果の固定フォーマット出力

pub mod implementations;

// 公開API
pub use implementations::{print_report, render_report};
