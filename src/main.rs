use clap::Parser;
use tracing_subscriber::EnvFilter;

use rose::api::{AppState, create_router};
use rose::config::CONFIG;

#[derive(Parser, Debug)]
#[command(name = "rose", about = "ROSE - Relevance Only Search Engine")]
struct Cli {
    /// Address to bind, overrides ROSE_HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides ROSE_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rose=info,tower_http=info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let host = cli.host.unwrap_or_else(|| CONFIG.host.clone());
    let port = cli.port.unwrap_or(CONFIG.port);

    let app = create_router(AppState::from_config(&CONFIG));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!("ROSE listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
