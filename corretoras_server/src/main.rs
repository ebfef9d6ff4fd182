use anyhow::{Context, Result};
use clap::Parser;
use corretoras_server::{create_app, AppState, Cli, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("corretoras=info".parse()?)
                .add_directive("brasilapi_cvm=info".parse()?),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from(Cli::parse());
    let directory = config
        .directory()
        .context("invalid upstream configuration")?;
    let app = create_app(AppState::new(directory));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, upstream = %config.upstream_url, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
