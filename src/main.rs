use anyhow::Context;
use clap::Parser;
use devicegate::cli::{Cli, Commands, ServeArgs};
use devicegate::docs::ApiDoc;
use devicegate::logging::init_tracing;
use devicegate::router::init_router;
use devicegate::state::init_app_state;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use utoipa::OpenApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    match Cli::parse().into_command() {
        Commands::Openapi => {
            let json = serde_json::to_string_pretty(&ApiDoc::openapi())?;
            println!("{json}");
            Ok(())
        }
        Commands::Serve(args) => serve(args).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    init_tracing(args.log_format);

    let state = init_app_state()
        .await
        .context("Failed to load identity state")?;
    let ticker = state.metrics.spawn_uptime_ticker();
    let app = init_router(state);

    let listener = TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", args.host, args.port))?;
    let addr = listener.local_addr()?;

    info!("Server running on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(ticker) = ticker {
        ticker.abort();
    }
    info!("Gracefully shutdown");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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
}
