// タスク処理機能
// 可変コスト処理のシミュレーション実装

pub mod implementations;

// 公開API
pub use implementations::SimulatedProcessor;
