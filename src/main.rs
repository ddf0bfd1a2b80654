use std::{net::SocketAddr, sync::Arc};

use axum::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todo_service::{
    config::Config, db, error::StartupError, route::create_router, store::TodoStore, AppState,
};

const PORT: u16 = 9090;

// Entry point of the application
#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match config {
        Ok(config) => run(config).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "todo service failed");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    let pool = db::connect(&config).await?;
    db::init_schema(&pool).await?;

    let app_state = Arc::new(AppState::new(TodoStore::new(pool.clone())));
    let app = create_router(app_state);

    // Specify the address and port to run the server on
    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let server = Server::try_bind(&addr).map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "server started");

    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    pool.close().await;
    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
