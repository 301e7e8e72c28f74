mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod opentelemetry;
mod services;

use config::AppConfig;
use container::Container;
use infrastructure::databases::surrealdb;

use actix_web::HttpServer;
use include_dir::{Dir, include_dir};
use std::sync::Arc;
use surrealdb_migrations::MigrationRunner;
use thiserror::Error;

#[cfg(test)]
mod tests;

const MIGRATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migration");

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Migration(String),
    #[error(transparent)]
    OTel(#[from] opentelemetry::OTelError),
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;

    let provider = opentelemetry::configure(&config.service, &config.logging)?;

    let conn = surrealdb::connect(&config.surrealdb).await?;

    if config.surrealdb.migration {
        MigrationRunner::new(&conn)
            .load_files(&MIGRATIONS_DIR)
            .up()
            .await
            .map_err(|err| StartupError::Migration(err.to_string()))?;

        tracing::info!("migrations applied");
    }

    let container = Arc::new(Container::new(conn));
    let allowed_origins = config.server.allowed_origins;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "starting http server"
    );

    HttpServer::new(move || app::create(Arc::clone(&container), allowed_origins.clone()))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    opentelemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
