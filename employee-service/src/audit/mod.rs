//! 監査ログシステム
//!
//! 社員レコードの変更ごとに、部署をパーティションキーとする追記専用エントリを記録する

/// 監査ログの型定義
pub mod types;

/// 監査ログストア（パーティションキー + 行キー）
pub mod store;
