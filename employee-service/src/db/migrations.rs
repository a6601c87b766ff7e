// データベース接続プール作成とマイグレーション実行

use crate::common::error::ServiceError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// SQLite接続プールを作成する
///
/// ファイルが存在しない場合は親ディレクトリごと作成する。
/// `sqlite::memory:` 指定時は単一接続に固定する（接続ごとに別DBになるため）。
///
/// # Arguments
/// * `database_url` - データベースURL（例: "sqlite:data/employees.db"）
pub async fn connect_pool(database_url: &str) -> Result<SqlitePool, ServiceError> {
    let in_memory = is_memory_url(database_url);
    if !in_memory {
        ensure_parent_dir(database_url)?;
    }

    let connect_options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ServiceError::Database(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    pool_options
        .connect_with(connect_options)
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to connect to database: {}", e)))
}

/// 社員DBの接続プールを作成してマイグレーションを実行
///
/// # Returns
/// * `Ok(SqlitePool)` - 初期化済みデータベースプール
/// * `Err(ServiceError)` - 初期化失敗
pub async fn initialize_database(database_url: &str) -> Result<SqlitePool, ServiceError> {
    tracing::info!("Opening employee database: {}", database_url);
    let pool = connect_pool(database_url).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

/// マイグレーションを実行（sqlx::migrate!マクロを使用）
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), ServiceError> {
    tracing::info!("Running database migrations");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to run migrations: {}", e)))?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

// SQLiteファイルはディレクトリが存在しないと作成できないため、先に作成しておく
fn ensure_parent_dir(database_url: &str) -> Result<(), ServiceError> {
    let Some(path) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    // `sqlite://` 形式に備えてスラッシュを除去し、クエリ部分を除外
    let normalized = path.trim_start_matches("//");
    let path_without_params = normalized.split('?').next().unwrap_or(normalized);
    let db_path = std::path::Path::new(path_without_params);
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ServiceError::Database(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
