//! Employee Record Service Entry Point

use clap::Parser;
use employee_service::cli::{Cli, Commands};
use employee_service::common::error::ServiceError;
use employee_service::config::{bind_addr_from_env, ServiceConfig};
use employee_service::{logging, server, AppState};
use tracing::info;

struct ServerConfig {
    bind_addr: String,
    service: ServiceConfig,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ServiceError> {
        Ok(Self {
            bind_addr: bind_addr_from_env(),
            service: ServiceConfig::from_env()?,
        })
    }

    fn from_args(args: &employee_service::cli::serve::ServeArgs) -> Result<Self, ServiceError> {
        Ok(Self {
            bind_addr: args.bind_addr(),
            service: args.service_config()?,
        })
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = match &cli.command {
        Some(Commands::Serve(args)) => ServerConfig::from_args(args),
        None => ServerConfig::from_env(),
    };

    let result = match config {
        Ok(config) => run_server(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("Employee service failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> Result<(), ServiceError> {
    info!(
        "Starting employee service (database: {}, audit store: {}, table: {})",
        config.service.database_url, config.service.audit_store_url, config.service.audit_table
    );

    let state = AppState::from_config(&config.service).await?;
    server::run(state, &config.bind_addr).await
}
