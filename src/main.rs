use anyhow::Context;
use clap::Parser;
use loyverse_proxy::api::{build_router, routes::ENDPOINTS, AppState};
use loyverse_proxy::utils::logger;
use loyverse_proxy::{CliConfig, FileConfig, LoyverseClient, LoyverseService, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting loyverse-proxy");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli
        .config
        .as_ref()
        .map(FileConfig::from_file)
        .transpose()
        .and_then(|file| Settings::resolve(cli.overrides(), file))
    {
        Ok(settings) => settings,
        Err(e) => {
            if e.is_config_error() {
                tracing::error!("❌ Configuration validation failed: {}", e);
            } else {
                tracing::error!("❌ Failed to load configuration: {}", e);
            }
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let client = LoyverseClient::new(&settings.api_base, settings.api_token.clone())?;
    let service = LoyverseService::new(Arc::new(client));
    let app = build_router(AppState::new(service, settings.propagate_upstream_status));

    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("🚀 Server running at http://{}", addr);
    tracing::info!("Upstream API: {}", settings.api_base);
    tracing::info!("Available endpoints:");
    for (path, description) in ENDPOINTS {
        tracing::info!("  - {} ({})", path, description);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
