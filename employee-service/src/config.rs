//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs, and the service
//! configuration built from them.

use crate::audit::types::TableName;
use crate::common::error::{CommonError, CommonResult};
use crate::db::employees::EMPLOYEES_TABLE;

/// Default relational store URL
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/employees.db";
/// Default audit store URL
pub const DEFAULT_AUDIT_STORE_URL: &str = "sqlite:data/audit-log.db";
/// Default audit table (namespace) name
pub const DEFAULT_AUDIT_TABLE: &str = "EmployeeLog";

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Bind address (`host:port`) from `EMPLOYEE_HOST` / `EMPLOYEE_PORT`
///
/// An unparsable port falls back to the default.
pub fn bind_addr_from_env() -> String {
    let host = std::env::var("EMPLOYEE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = std::env::var("EMPLOYEE_PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    format!("{}:{}", host, port)
}

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use employee_service::config::get_env_with_fallback;
///
/// let url = get_env_with_fallback("EMPLOYEE_DATABASE_URL", "DATABASE_URL");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Store configuration, read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Relational store (employee records) URL
    pub database_url: String,
    /// Audit log store URL
    pub audit_store_url: String,
    /// Audit log table (namespace) name
    pub audit_table: TableName,
}

impl ServiceConfig {
    /// Build a configuration from explicit values.
    pub fn new(
        database_url: impl Into<String>,
        audit_store_url: impl Into<String>,
        audit_table: &str,
    ) -> CommonResult<Self> {
        let database_url = database_url.into();
        let audit_store_url = audit_store_url.into();
        if database_url.trim().is_empty() {
            return Err(CommonError::Config("database URL is empty".to_string()));
        }
        if audit_store_url.trim().is_empty() {
            return Err(CommonError::Config("audit store URL is empty".to_string()));
        }
        let audit_table = TableName::parse(audit_table)
            .map_err(|e| CommonError::Config(e.to_string()))?;
        // SQLiteのテーブル名は大文字小文字を区別しない。両ストアが同じファイルを
        // 指す場合に社員テーブルを監査ログテーブルとして扱ってしまう。
        if audit_table.as_str().eq_ignore_ascii_case(EMPLOYEES_TABLE) {
            return Err(CommonError::Config(format!(
                "audit table name '{}' collides with the employee table",
                audit_table
            )));
        }

        Ok(Self {
            database_url,
            audit_store_url,
            audit_table,
        })
    }

    /// Load the configuration from environment variables.
    pub fn from_env() -> CommonResult<Self> {
        Self::new(
            get_env_with_fallback_or("EMPLOYEE_DATABASE_URL", "DATABASE_URL", DEFAULT_DATABASE_URL),
            get_env_with_fallback_or(
                "EMPLOYEE_AUDIT_STORE_URL",
                "AUDIT_STORE_URL",
                DEFAULT_AUDIT_STORE_URL,
            ),
            &get_env_with_fallback_or("EMPLOYEE_AUDIT_TABLE", "AZURE_TABLE_NAME", DEFAULT_AUDIT_TABLE),
        )
    }
}
