use dotenvy::dotenv;

mod config;
mod setup;
mod shell;

use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Terminal entry point.
///
/// Initializes tracing, loads configuration, wires dependencies, and hands
/// control to the interactive shell. Everything below the shell is the same
/// store/repository graph a screen-based frontend would drive.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let config = AppConfig::from_env();
    let container = DependencyContainer::new(&config);

    shell::run(container).await
}
