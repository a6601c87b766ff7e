//! CLI module for employee-service
//!
//! Provides the command-line interface for starting the service.

pub mod serve;

use clap::{Parser, Subcommand};

/// Employee record service - CRUD over employee records with an audit trail
#[derive(Parser, Debug)]
#[command(name = "employee-service")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    EMPLOYEE_HOST              Bind address (default: 0.0.0.0)
    EMPLOYEE_PORT              Listen port (default: 8080)
    EMPLOYEE_LOG_LEVEL         Log level (default: info)
    EMPLOYEE_LOG_DIR           Directory for rolling log files (optional)
    EMPLOYEE_DATABASE_URL      Employee store URL (default: sqlite:data/employees.db)
    EMPLOYEE_AUDIT_STORE_URL   Audit log store URL (default: sqlite:data/audit-log.db)
    EMPLOYEE_AUDIT_TABLE       Audit log table name (default: EmployeeLog)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
}
