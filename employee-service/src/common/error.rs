//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `ServiceError`は`status_code()`と`external_message()`を提供し、
//! 内部情報（SQL文、ファイルパス等）を含まないHTTPレスポンスを生成できます。

use axum::http::StatusCode;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// employee service error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Employee not found
    #[error("Employee not found: {0}")]
    EmployeeNotFound(i64),

    /// Relational store error (query or commit failure)
    #[error("Database error: {0}")]
    Database(String),

    /// Audit log store error (table provisioning or upsert failure)
    #[error("Audit store error: {0}")]
    AuditStore(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns a safe error message for external clients.
    ///
    /// This never includes SQL text, table names or file paths. Use the
    /// `Display` implementation (`to_string()`) for server logs.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(CommonError::Config(_)) => "Service misconfigured",
            Self::Common(_) => "Request error",
            Self::EmployeeNotFound(_) => "Employee not found",
            Self::Database(_) => "Database error",
            Self::AuditStore(_) => "Audit log error",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Common(CommonError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Common(_) => StatusCode::BAD_REQUEST,
            Self::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::AuditStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (employee service)
pub type ServiceResult<T> = Result<T, ServiceError>;
