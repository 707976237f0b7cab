//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, wiring of repositories and remote
//! clients for the selected service, and the Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::{Router, ServiceExt};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{CarService, LaptopService, UserService};
use crate::config::{Config, ServiceKind};
use crate::infrastructure::http::{HttpCarClient, HttpLaptopClient, HttpUserClient};
use crate::infrastructure::persistence::{PgCarRepository, PgLaptopRepository, PgUserRepository};
use crate::routes::{car_router, laptop_router, normalize, user_router};
use crate::state::{CarState, LaptopState, UserState};

/// Runs the configured service until Ctrl-C.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations for the service's own table
/// - Remote clients for the sibling services it calls
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config).await?;
    tracing::info!("Connected to database");

    migrator(config.service)
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!(service = %config.service, "Migrations applied");

    let http = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    let app = build_router(&config, Arc::new(pool), http);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(service = %config.service, "Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(normalize(app)),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!(service = %config.service, "Server stopped");
    Ok(())
}

async fn connect(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Migrations of the service's own table.
///
/// The services may share one database, so each migrator ignores versions
/// applied by the others.
fn migrator(service: ServiceKind) -> Migrator {
    let mut migrator = match service {
        ServiceKind::User => sqlx::migrate!("./migrations/users"),
        ServiceKind::Car => sqlx::migrate!("./migrations/cars"),
        ServiceKind::Laptop => sqlx::migrate!("./migrations/laptops"),
    };
    migrator.set_ignore_missing(true);
    migrator
}

fn build_router(config: &Config, pool: Arc<PgPool>, http: reqwest::Client) -> Router {
    match config.service {
        ServiceKind::User => {
            let service = UserService::new(
                Arc::new(PgUserRepository::new(pool)),
                Arc::new(HttpCarClient::new(config.car_service_url.clone(), http.clone())),
                Arc::new(HttpLaptopClient::new(config.laptop_service_url.clone(), http)),
            );
            user_router(UserState {
                user_service: Arc::new(service),
            })
        }
        ServiceKind::Car => {
            let service = CarService::new(
                Arc::new(PgCarRepository::new(pool)),
                Arc::new(HttpUserClient::new(config.user_service_url.clone(), http)),
            );
            car_router(CarState {
                car_service: Arc::new(service),
            })
        }
        ServiceKind::Laptop => {
            let service = LaptopService::new(
                Arc::new(PgLaptopRepository::new(pool)),
                Arc::new(HttpUserClient::new(config.user_service_url.clone(), http)),
            );
            laptop_router(LaptopState {
                laptop_service: Arc::new(service),
            })
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
