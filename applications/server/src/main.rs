/// ClipHub Server - playlist service for the video sharing platform
use clap::Parser;
use cliphub_server::{api, config::ServerConfig, services::TokenVerifier, state::AppState};
use cliphub_store::MemoryStore;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cliphub-server")]
#[command(about = "ClipHub playlist service", long_about = None)]
struct Cli {
    /// Bind host override
    #[arg(long)]
    host: Option<String>,

    /// Bind port override
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cliphub_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = ServerConfig::load()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    tracing::info!("Starting ClipHub server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize the entity store
    let store = Arc::new(MemoryStore::new());
    tracing::info!("Entity store initialized");

    // Initialize token verification
    let verifier = Arc::new(TokenVerifier::new(config.auth.jwt_secret.clone()));
    tracing::info!("Token verifier initialized");

    // Build application state and router
    let app_state = AppState::new(store);
    let app = api::router(app_state, verifier);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
