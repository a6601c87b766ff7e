//! serve サブコマンド
//!
//! 社員レコードサービスを起動します。

use crate::common::error::CommonResult;
use crate::config::ServiceConfig;
use clap::Args;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, default_value = "8080", env = "EMPLOYEE_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "EMPLOYEE_HOST")]
    pub host: String,

    /// Employee store URL
    #[arg(long, env = "EMPLOYEE_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Audit log store URL
    #[arg(long, env = "EMPLOYEE_AUDIT_STORE_URL")]
    pub audit_store_url: Option<String>,

    /// Audit log table name
    #[arg(long, env = "EMPLOYEE_AUDIT_TABLE")]
    pub audit_table: Option<String>,
}

impl ServeArgs {
    /// 引数で指定された値を環境変数由来の設定に上書きする
    pub fn service_config(&self) -> CommonResult<ServiceConfig> {
        let base = ServiceConfig::from_env()?;
        let audit_table = self
            .audit_table
            .clone()
            .unwrap_or_else(|| base.audit_table.to_string());
        ServiceConfig::new(
            self.database_url.clone().unwrap_or(base.database_url),
            self.audit_store_url.clone().unwrap_or(base.audit_store_url),
            &audit_table,
        )
    }

    /// バインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
