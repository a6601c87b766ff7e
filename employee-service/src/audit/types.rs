//! 監査ログの型定義

use crate::common::error::{CommonError, CommonResult};
use crate::types::Employee;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 操作種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditAction {
    /// 作成
    Insertion,
    /// 更新
    Update,
    /// 削除
    Removal,
}

impl AuditAction {
    /// 文字列からAuditActionに変換（未知の値はNone）
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Insertion" => Some(Self::Insertion),
            "Update" => Some(Self::Update),
            "Removal" => Some(Self::Removal),
            _ => None,
        }
    }

    /// AuditActionを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insertion => "Insertion",
            Self::Update => "Update",
            Self::Removal => "Removal",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 監査ログエントリ
///
/// 社員レコードの時点コピーに操作種別を加えたもの。
/// パーティションキーは部署、行キーはエントリごとに生成するUUID。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// パーティションキー（部署）
    pub partition_key: String,
    /// 行キー（UUID v4）
    pub row_key: String,
    /// 操作種別
    pub action: AuditAction,
    /// 対象社員ID
    pub employee_id: i64,
    /// 氏名
    pub name: String,
    /// 住所
    pub address: String,
    /// 内線番号
    pub extension: String,
    /// 業務用メールアドレス
    pub professional_email: String,
    /// 部署
    pub department: String,
    /// 給与
    pub salary: f64,
    /// 入社日時
    pub admission_date: Option<NaiveDateTime>,
    /// 記録日時
    pub timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    /// 社員レコードから新しいエントリを作成する（行キーは毎回新規生成）
    pub fn record(employee: &Employee, action: AuditAction) -> Self {
        Self {
            partition_key: employee.department.clone(),
            row_key: Uuid::new_v4().to_string(),
            action,
            employee_id: employee.id,
            name: employee.name.clone(),
            address: employee.address.clone(),
            extension: employee.extension.clone(),
            professional_email: employee.professional_email.clone(),
            department: employee.department.clone(),
            salary: employee.salary,
            admission_date: employee.admission_date,
            timestamp: Utc::now(),
        }
    }
}

/// 監査ログテーブル名（名前空間）
///
/// 英字で始まる3〜63文字の英数字のみ許可する。
/// SQLに埋め込むため、この型を経由しない名前は受け付けない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    /// テーブル名を検証して作成
    pub fn parse(name: &str) -> CommonResult<Self> {
        let len = name.len();
        if !(3..=63).contains(&len) {
            return Err(CommonError::Validation(format!(
                "Audit table name must be 3-63 characters long: '{}'",
                name
            )));
        }
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(CommonError::Validation(format!(
                "Audit table name must start with a letter: '{}'",
                name
            )));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CommonError::Validation(format!(
                "Audit table name must be alphanumeric: '{}'",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// テーブル名文字列
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
