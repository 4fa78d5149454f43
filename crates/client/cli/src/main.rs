//! Console client entry point.
mod app;
mod config;
mod input;

use anyhow::Result;
use app::ConsoleApp;
use config::CliConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    ConsoleApp::new(config).run()
}
