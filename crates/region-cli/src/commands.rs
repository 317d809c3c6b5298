//! Command dispatch for `horizon-regions`.

use crate::cli::{Cli, Commands};
use crate::factory::build_service;
use crate::output::{self, OutputFormat};
use crate::settings::Settings;
use anyhow::{anyhow, Result};
use hpc_region::RegionService;
use tracing::info;

/// Settings file, then environment, then command-line flags.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    settings.apply_env()?;
    if let Some(provider) = &cli.provider {
        settings.provider = provider.parse()?;
    }
    if let Some(region) = &cli.region {
        settings.current_region = Some(region.clone());
    }
    Ok(settings)
}

/// Run one command against `service` and render its result.
pub async fn execute(
    command: &Commands,
    service: &RegionService,
    format: OutputFormat,
) -> Result<String> {
    match command {
        Commands::List => output::render_regions(&service.list().await?, format),
        Commands::Get { id } => {
            let region = service.get(id).await?.ok_or_else(|| {
                anyhow!("region {} not found for provider {}", id, service.provider_name())
            })?;
            output::render_region(&region, format)
        }
        Commands::Find { name } => output::render_regions(&service.find(name).await?, format),
        Commands::Current => output::render_region(&service.current().await?, format),
        Commands::Zones { region_id } => {
            output::render_zones(&service.zones(region_id).await?, format)
        }
        Commands::Health => output::render_health(&service.health().await?, format),
    }
}

pub async fn run(cli: Cli) -> Result<String> {
    let settings = resolve_settings(&cli)?;
    info!(provider = %settings.provider, "resolving region service");
    let service = build_service(&settings).await?;
    execute(&cli.command, &service, cli.format).await
}
