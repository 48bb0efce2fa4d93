/// Todo Server - versioned demo API
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf};
use todo_core::{AppInfo, VersionInfo};
use todo_health_view::{HealthClient, HealthView};
use todo_server::{config::ServerConfig, create_router, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "todo-server")]
#[command(about = "Todo app API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Fetch and print the API root and health of a running server
    Check {
        /// Server base URL
        #[arg(short, long, env = "BASE_URL", default_value = "http://localhost:3000")]
        url: String,
        /// API version (e.g. v1.4); discovered from the /api redirect when omitted
        #[arg(long)]
        api_version: Option<String>,
        /// Print HTML instead of text
        #[arg(long)]
        html: bool,
    },
    /// Print the resolved application and API versions
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve { config: None }) {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Check {
            url,
            api_version,
            html,
        } => {
            check(&url, api_version.as_deref(), html).await?;
        }
        Commands::Version => {
            let config = ServerConfig::load()?;
            let version = VersionInfo::resolve(&config.version_sources());
            println!("{}", serde_json::to_string_pretty(&version)?);
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = match config_path {
        Some(path) => {
            let env = std::env::vars().collect();
            ServerConfig::load_from(&path, &env)?
        }
        None => ServerConfig::load()?,
    };
    config.validate()?;

    let version = VersionInfo::resolve(&config.version_sources());
    let info = AppInfo::new(version);

    tracing::info!("Starting Todo Server");
    tracing::info!("Environment: {}", config.environment.as_str());
    tracing::info!("Session ID: {}", info.session_id);
    tracing::info!(
        "App version: {}, API version: {}",
        info.app_version(),
        info.api_version()
    );

    let addr = config.socket_addr()?;
    if config.enable_swagger {
        tracing::info!("API docs at {}/api-docs", config.base_url());
    }

    // Build router
    let app = create_router(AppState::new(info, config));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn check(url: &str, api_version: Option<&str>, html: bool) -> anyhow::Result<()> {
    let client = match api_version {
        Some(version) => HealthClient::new(url, version)?,
        None => HealthClient::discover(url).await?,
    };

    let view = HealthView::load(&client).await;
    if html {
        println!("{}", view.render_html());
    } else {
        print!("{}", view.render_text());
    }

    if view.is_error() {
        anyhow::bail!("Health check against {} failed", client.api_base());
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
