// ワーカーイベント監視機能
// ワーカーの起動・タスク完了・終了の報告

pub mod implementations;

// 公開API
pub use implementations::{ConsoleEventLogger, NoOpEventLogger};
