use clap::Parser;
use tracing::error;

use wal2json_updater::cli::Cli;
use wal2json_updater::config::UpdaterConfig;
use wal2json_updater::logging;
use wal2json_updater::updater::{UpdateError, UpdateReport, UpdateRequest, Updater};
use wal2json_updater::version::registries::DockerHubRegistry;

async fn run(
    config: &UpdaterConfig,
    request: &UpdateRequest,
) -> Result<UpdateReport, UpdateError> {
    let registry = DockerHubRegistry::new(&config.registry.base_url, config.registry.page_size)?;
    Updater::new(registry).run(request).await
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => UpdaterConfig::load(path)?,
        None => UpdaterConfig::default(),
    };
    let request = cli.into_request(&config);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(&config, &request))
        .inspect_err(|e| error!("Update failed: {}", e))?;

    Ok(())
}
