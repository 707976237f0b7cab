//! Entry point: `asset-services <user|car|laptop>`.

use anyhow::Result;
use clap::{Parser, Subcommand};

use asset_services::config::{self, ServiceKind};
use asset_services::{server, telemetry};

/// Runs one of the asset services.
#[derive(Parser)]
#[command(name = "asset-services")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    service: Service,
}

#[derive(Subcommand)]
enum Service {
    /// User service (users, car proxy, user + cars + laptops view)
    User,
    /// Car service
    Car,
    /// Laptop service
    Laptop,
}

impl From<Service> for ServiceKind {
    fn from(service: Service) -> Self {
        match service {
            Service::User => ServiceKind::User,
            Service::Car => ServiceKind::Car,
            Service::Laptop => ServiceKind::Laptop,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env(cli.service.into())?;

    telemetry::init(&config);
    config.print_summary();

    server::run(config).await
}
