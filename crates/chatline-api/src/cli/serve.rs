//! `chatline serve`: run the REST API until Ctrl+C or SIGTERM.

use anyhow::Context;
use console::style;
use tracing::{info, warn};

use chatline_types::config::AppConfig;

use crate::http::router::{WEB_UI_PATH, build_router};
use crate::state::AppState;

pub async fn serve(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let state = AppState::init(&config).await?;
    let serves_web = std::path::Path::new(&config.server.web_dir).is_dir();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    println!(
        "  {} Chatline API listening on {}",
        style("⚡").bold(),
        style(format!("http://{addr}")).cyan()
    );
    if serves_web {
        println!(
            "  {} Web client at {}",
            style("🌐").bold(),
            style(format!("http://{addr}{WEB_UI_PATH}/")).cyan()
        );
    }
    println!("  {}", style("Press Ctrl+C to stop").dim());
    info!(%addr, model = %config.llm.model, "Server started");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
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
                warn!(error = %e, "Failed to listen for SIGTERM");
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
