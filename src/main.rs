//! TheoLingua forms relay server.
//!
//! Serves `POST /api/forms` and `GET /health`. Leads are kept in Postgres when
//! a database is configured, otherwise in memory.

use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use theolingua::adapters::http::{app_router, FormsAppState};
use theolingua::adapters::{HttpLeadRelay, InMemoryLeadRepository, PostgresLeadRepository};
use theolingua::config::{AppConfig, DatabaseConfig, ServerConfig};
use theolingua::ports::LeadRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let lead_repository = lead_repository(config.database.as_ref()).await?;
    let lead_relay = Arc::new(HttpLeadRelay::new(
        config.forms.relay_url.clone(),
        config.forms.relay_timeout(),
    )?);

    let state = FormsAppState {
        lead_repository,
        lead_relay,
    };
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Forms relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_new(&server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if server.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn lead_repository(
    database: Option<&DatabaseConfig>,
) -> Result<Arc<dyn LeadRepository>, Box<dyn Error>> {
    let Some(database) = database else {
        warn!("No database configured; leads are kept in memory only");
        return Ok(Arc::new(InMemoryLeadRepository::new()));
    };

    let pool = database.connect().await?;
    let repository = PostgresLeadRepository::new(pool);
    if database.ensure_schema {
        repository.ensure_schema().await?;
    }
    info!("Lead repository: postgres");
    Ok(Arc::new(repository))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
