#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::middleware::Logger;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, web};
#[cfg(feature = "server")]
use log::info;

#[cfg(feature = "server")]
use crate::db::{PoolOptions, establish_connection_pool, run_migrations};
#[cfg(feature = "server")]
use crate::middleware::TokenKeys;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
///
/// The store is opened and migrated before binding and is released when the
/// server stops.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(
        &server_config.database_url,
        PoolOptions {
            max_size: server_config.db_pool_size,
            connection_timeout: Duration::from_secs(server_config.db_connection_timeout_secs),
            busy_timeout: Duration::from_secs(server_config.db_busy_timeout_secs),
        },
    )
    .map_err(|e| std::io::Error::other(format!("Failed to establish database connection: {e}")))?;

    run_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;

    let repo = web::Data::new(DieselRepository::new(pool));
    let keys = web::Data::new(TokenKeys::new(
        &server_config.secret,
        server_config.token_ttl_hours,
    ));

    let bind_address = (server_config.address.clone(), server_config.port);
    info!(
        "Healio API listening on {}:{}",
        server_config.address, server_config.port
    );

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(repo.clone())
            .app_data(keys.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await;

    info!("Healio API stopped");
    result
}
