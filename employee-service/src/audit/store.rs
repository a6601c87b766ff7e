//! 監査ログストア
//!
//! パーティションキー + 行キーでエントリを一意に識別するキーバリュー型テーブル。
//! 社員DBとは別の接続プールを持ち、テーブルが存在しなければ作成する。

use crate::audit::types::{AuditAction, AuditLogEntry, TableName};
use crate::common::error::ServiceError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;

/// 監査ログストアの操作
///
/// サービス層はこのtraitだけに依存する（テストで差し替え可能）。
#[async_trait]
pub trait AuditTableStore: Send + Sync {
    /// テーブルが存在しなければ作成する（冪等）
    async fn ensure_table(&self) -> Result<(), ServiceError>;

    /// (partition_key, row_key) でエントリを挿入、既存なら置換する
    async fn upsert_entity(&self, entry: &AuditLogEntry) -> Result<(), ServiceError>;

    /// パーティション内の全エントリを古い順に取得する
    async fn query_partition(&self, partition_key: &str)
        -> Result<Vec<AuditLogEntry>, ServiceError>;
}

/// SQLiteをバックエンドにした監査ログストア
#[derive(Clone)]
pub struct SqliteTableStore {
    pool: SqlitePool,
    table: TableName,
}

impl SqliteTableStore {
    /// ストアに接続し、テーブルを用意する
    ///
    /// ストアのファイルが存在しない場合は自動作成する。
    pub async fn connect(url: &str, table: TableName) -> Result<Self, ServiceError> {
        let pool = crate::db::migrations::connect_pool(url)
            .await
            .map_err(|e| ServiceError::AuditStore(format!("Failed to open audit store: {}", e)))?;
        let store = Self::with_pool(pool, table);
        store.ensure_table().await?;
        tracing::info!("Audit log table '{}' is ready", store.table);
        Ok(store)
    }

    /// 既存プールからストアを作成（テーブル作成は行わない）
    pub fn with_pool(pool: SqlitePool, table: TableName) -> Self {
        Self { pool, table }
    }

    /// テーブル名
    pub fn table(&self) -> &TableName {
        &self.table
    }
}

#[async_trait]
impl AuditTableStore for SqliteTableStore {
    async fn ensure_table(&self) -> Result<(), ServiceError> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS \"{table}\" (
                partition_key TEXT NOT NULL,
                row_key TEXT NOT NULL,
                action TEXT NOT NULL,
                employee_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                address TEXT NOT NULL,
                extension TEXT NOT NULL,
                professional_email TEXT NOT NULL,
                department TEXT NOT NULL,
                salary REAL NOT NULL,
                admission_date TEXT,
                timestamp TEXT NOT NULL,
                PRIMARY KEY (partition_key, row_key)
            )",
            table = self.table
        );
        sqlx::query(&ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                ServiceError::AuditStore(format!(
                    "Failed to create audit table {}: {}",
                    self.table, e
                ))
            })?;
        Ok(())
    }

    async fn upsert_entity(&self, entry: &AuditLogEntry) -> Result<(), ServiceError> {
        let statement = format!(
            "INSERT INTO \"{table}\" (
                partition_key, row_key, action, employee_id, name, address, extension,
                professional_email, department, salary, admission_date, timestamp
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(partition_key, row_key) DO UPDATE SET
                action = excluded.action,
                employee_id = excluded.employee_id,
                name = excluded.name,
                address = excluded.address,
                extension = excluded.extension,
                professional_email = excluded.professional_email,
                department = excluded.department,
                salary = excluded.salary,
                admission_date = excluded.admission_date,
                timestamp = excluded.timestamp",
            table = self.table
        );
        sqlx::query(&statement)
            .bind(&entry.partition_key)
            .bind(&entry.row_key)
            .bind(entry.action.as_str())
            .bind(entry.employee_id)
            .bind(&entry.name)
            .bind(&entry.address)
            .bind(&entry.extension)
            .bind(&entry.professional_email)
            .bind(&entry.department)
            .bind(entry.salary)
            .bind(entry.admission_date)
            .bind(entry.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                ServiceError::AuditStore(format!("Failed to upsert audit log entry: {}", e))
            })?;
        Ok(())
    }

    async fn query_partition(
        &self,
        partition_key: &str,
    ) -> Result<Vec<AuditLogEntry>, ServiceError> {
        let statement = format!(
            "SELECT partition_key, row_key, action, employee_id, name, address, extension,
                    professional_email, department, salary, admission_date, timestamp
             FROM \"{table}\"
             WHERE partition_key = ?
             ORDER BY timestamp ASC, rowid ASC",
            table = self.table
        );
        let rows = sqlx::query_as::<_, AuditLogRow>(&statement)
            .bind(partition_key)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                ServiceError::AuditStore(format!("Failed to query audit log entries: {}", e))
            })?;

        rows.into_iter().map(AuditLogRow::try_into_entry).collect()
    }
}

// SQLiteからの行取得用の内部型
#[derive(sqlx::FromRow)]
struct AuditLogRow {
    partition_key: String,
    row_key: String,
    action: String,
    employee_id: i64,
    name: String,
    address: String,
    extension: String,
    professional_email: String,
    department: String,
    salary: f64,
    admission_date: Option<NaiveDateTime>,
    timestamp: String,
}

impl AuditLogRow {
    fn try_into_entry(self) -> Result<AuditLogEntry, ServiceError> {
        let action = AuditAction::parse(&self.action).ok_or_else(|| {
            ServiceError::AuditStore(format!("Unknown audit action: {}", self.action))
        })?;
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|e| ServiceError::AuditStore(format!("Invalid audit timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(AuditLogEntry {
            partition_key: self.partition_key,
            row_key: self.row_key,
            action,
            employee_id: self.employee_id,
            name: self.name,
            address: self.address,
            extension: self.extension,
            professional_email: self.professional_email,
            department: self.department,
            salary: self.salary,
            admission_date: self.admission_date,
            timestamp,
        })
    }
}
