use clap::Parser;
use quad::app::App;
use quad::cli::Args;
use quad::config::Config;
use quad::logging::setup_logging;
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load config and setup logging before App::new() so startup logs are never silently dropped
    let config = Config::from_env().expect("Failed to load config");
    setup_logging(&config, args.tracing);

    // Log application startup context
    info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = env!("GIT_COMMIT_SHORT"),
        environment = if cfg!(debug_assertions) {
            "development"
        } else {
            "production"
        },
        "starting quad"
    );

    // Create and run the application
    let app = App::new(config).expect("Failed to initialize application");
    app.run().await
}
