use crate::config::Config;
use crate::state::AppState;
use crate::web::create_router;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info, warn};

/// Main application struct containing all necessary components
pub struct App {
    config: Config,
    app_state: AppState,
}

impl App {
    /// Create a new App instance with all necessary components initialized
    pub fn new(config: Config) -> Result<Self> {
        let app_state = AppState::new(&config).context("Failed to initialize app state")?;

        info!(
            signage = %config.signage_host,
            occupancy = %config.occupancy_host,
            study = %config.study_host,
            ratings = %config.ratings_host,
            "feed clients ready"
        );

        Ok(App { config, app_state })
    }

    /// Bind the listener and serve until a shutdown signal arrives.
    ///
    /// On SIGINT/SIGTERM the server stops accepting and drains in-flight
    /// requests, but never longer than the configured shutdown timeout.
    pub async fn run(self) -> ExitCode {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!(error = %e, %addr, "failed to bind listener");
                return ExitCode::FAILURE;
            }
        };

        info!(%addr, "web server listening");

        let router = create_router(self.app_state);
        let drain = Duration::from_secs(self.config.shutdown_timeout);

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
        tokio::spawn(async move {
            wait_for_signal().await;
            let _ = shutdown_tx.send(true);
        });

        let mut graceful_rx = shutdown_rx.clone();
        let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
            let _ = graceful_rx.wait_for(|fired| *fired).await;
            info!("shutdown signal received, draining in-flight requests");
        });

        tokio::select! {
            result = serve => match result {
                Ok(()) => {
                    info!("shutdown complete");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(error = %e, "web server exited with error");
                    ExitCode::FAILURE
                }
            },
            _ = async {
                let _ = shutdown_rx.wait_for(|fired| *fired).await;
                tokio::time::sleep(drain).await;
            } => {
                warn!(drain_seconds = drain.as_secs(), "drain timeout exceeded, exiting");
                ExitCode::SUCCESS
            }
        }
    }
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn wait_for_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT"),
        _ = terminate => info!("received SIGTERM"),
    }
}
