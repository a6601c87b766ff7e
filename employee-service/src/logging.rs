//! ロギング初期化ユーティリティ
//!
//! 標準出力へのfmtレイヤーに加え、`EMPLOYEE_LOG_DIR`が設定されている場合は
//! 日次ローテーションのファイル出力を追加する。

use crate::common::error::ServiceError;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログファイル名のプレフィックス
pub const LOG_FILE_PREFIX: &str = "employee-service.log";

const DEFAULT_LOG_LEVEL: &str = "info";

// ファイル出力ワーカーはプロセス終了まで保持する（dropすると未書き込み分が失われる）
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// ログレベル（フィルタ式）を取得
///
/// `EMPLOYEE_LOG_LEVEL` → `RUST_LOG` → `info` の順に解決する。
pub fn log_level() -> String {
    std::env::var("EMPLOYEE_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

/// ログ出力ディレクトリを取得（未設定ならファイル出力しない）
pub fn log_dir() -> Option<PathBuf> {
    std::env::var("EMPLOYEE_LOG_DIR")
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
}

/// tracing-subscriberを初期化する
pub fn init() -> Result<(), ServiceError> {
    let filter = EnvFilter::try_new(log_level()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_layer = match log_dir() {
        Some(dir) => {
            std::fs::create_dir_all(&dir).map_err(|e| {
                ServiceError::Internal(format!(
                    "Failed to create log directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().with_ansi(false).with_writer(writer))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()
        .map_err(|e| ServiceError::Internal(format!("Failed to initialize logging: {}", e)))
}
