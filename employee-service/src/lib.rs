//! Employee Record Service
//!
//! 社員レコードのCRUDと、変更ごとの監査ログ記録を提供するサーバー

#![warn(missing_docs)]

/// 共通型定義（エラー型）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// 監査ログ（型定義・ストア）
pub mod audit;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// データベースアクセス
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// axumサーバー起動・シャットダウン
pub mod server;

/// 社員レコードサービス
pub mod service;

/// 型定義
pub mod types;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 社員レコードサービス
    pub employee_service: service::EmployeeService,
}

impl AppState {
    /// 社員DBプールと監査ログストアからAppStateを構築する
    pub fn new(
        db_pool: sqlx::SqlitePool,
        audit_store: Arc<dyn audit::store::AuditTableStore>,
    ) -> Self {
        let employees = db::employees::EmployeeStorage::new(db_pool);
        Self {
            employee_service: service::EmployeeService::new(employees, audit_store),
        }
    }

    /// 設定に従って両ストアを開き、AppStateを構築する
    ///
    /// 社員DBはマイグレーションを実行し、監査ログテーブルは存在しなければ作成する。
    pub async fn from_config(
        config: &config::ServiceConfig,
    ) -> Result<Self, common::error::ServiceError> {
        let db_pool = db::migrations::initialize_database(&config.database_url).await?;
        let audit_store = audit::store::SqliteTableStore::connect(
            &config.audit_store_url,
            config.audit_table.clone(),
        )
        .await?;
        Ok(Self::new(db_pool, Arc::new(audit_store)))
    }
}
