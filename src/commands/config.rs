use anyhow::Result;
use owo_colors::OwoColorize;
use parish_core::config::ParishConfig;

pub fn run(config: &ParishConfig) -> Result<()> {
    let path = ParishConfig::config_path()?;
    println!("{}", path.display().to_string().dimmed());
    println!("{}", toml::to_string_pretty(config)?);
    println!("{} {}", "events file:".dimmed(), config.events_path().display());
    Ok(())
}
