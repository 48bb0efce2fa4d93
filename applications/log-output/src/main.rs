/// Log output - heartbeat logger
use log_output::{create_router, run_ticker, LogOutputConfig, LogState};
use std::sync::Arc;
use todo_core::SessionId;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "log_output=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LogOutputConfig::load()?;
    let session_id = SessionId::generate();
    tracing::info!("Application started. Session ID: {}", session_id);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let ticker = tokio::spawn(run_ticker(config.tick_period(), shutdown_rx, |line| {
        tracing::info!("{}", line);
    }));

    let app = create_router(Arc::new(LogState {
        session_id,
        port: config.port,
    }));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Receiver may already be gone if the ticker exited
    let _ = shutdown_tx.send(true);
    ticker.await?;

    tracing::info!("Shut down gracefully");
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

    tracing::info!("Received shutdown signal, shutting down gracefully...");
}
