//! Rendering of regions, zones and health for the terminal.

use anyhow::Result;
use hpc_region::{HealthStatus, Region, Zone};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Plain,
}

pub fn render_regions(regions: &[Region], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(regions)?),
        OutputFormat::Plain => Ok(regions
            .iter()
            .map(|r| r.id().to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            let mut lines = vec![format!("{:<24} {:<28} {:>5}", "ID", "NAME", "ZONES")];
            lines.extend(
                regions
                    .iter()
                    .map(|r| format!("{:<24} {:<28} {:>5}", r.id(), r.name(), r.zones().len())),
            );
            Ok(lines.join("\n"))
        }
    }
}

pub fn render_region(region: &Region, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(region)?),
        OutputFormat::Plain => Ok(region.to_string()),
        OutputFormat::Table => {
            let mut out = format!("{}\nname: {}\n", region, region.name());
            out.push_str(&render_zones(region.zones(), OutputFormat::Table)?);
            Ok(out)
        }
    }
}

pub fn render_zones(zones: &[Zone], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(zones)?),
        OutputFormat::Plain => Ok(zones
            .iter()
            .map(|z| z.id().to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            let mut lines = vec![format!("{:<28} {:<28} {}", "ZONE", "NAME", "REGION")];
            lines.extend(zones.iter().map(|z| {
                format!(
                    "{:<28} {:<28} {}",
                    z.id(),
                    z.name(),
                    z.region_name().unwrap_or("-")
                )
            }));
            Ok(lines.join("\n"))
        }
    }
}

pub fn render_health(health: &HealthStatus, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(health)?),
        _ => Ok(format!(
            "{} {} ({})",
            if health.healthy { "healthy" } else { "unhealthy" },
            health.message,
            health.checked_at.to_rfc3339()
        )),
    }
}
