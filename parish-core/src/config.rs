//! Global parish configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ParishError, ParishResult};

static DEFAULT_EVENTS_FILE: &str = "~/parish/events.json";
static DEFAULT_ADMIN_CACHE_TTL: &str = "60s";
pub const DEFAULT_SERVER_PORT: u16 = 4096;

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn default_admin_cache_ttl() -> String {
    DEFAULT_ADMIN_CACHE_TTL.to_string()
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

/// Configuration at ~/.config/parish/config.toml
///
/// Every key can be overridden with a `PARISH_` environment variable,
/// e.g. `PARISH_EVENTS_FILE` or `PARISH_ADMINS=alice,bob`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ParishConfig {
    /// JSON export of the events table
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    /// User ids allowed into the admin views
    #[serde(default)]
    pub admins: Vec<String>,

    /// How long an admin check result is reused (humantime, e.g. "60s")
    #[serde(default = "default_admin_cache_ttl")]
    pub admin_cache_ttl: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Default for ParishConfig {
    fn default() -> Self {
        ParishConfig {
            events_file: default_events_file(),
            admins: Vec::new(),
            admin_cache_ttl: default_admin_cache_ttl(),
            server_port: default_server_port(),
        }
    }
}

impl ParishConfig {
    pub fn config_path() -> ParishResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ParishError::Config("Could not determine config directory".into()))?
            .join("parish");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented default file first if needed.
    pub fn load() -> ParishResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> ParishResult<Self> {
        let config: ParishConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("PARISH")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("admins"),
            )
            .build()
            .map_err(|e| ParishError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ParishError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Events file with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn admin_cache_ttl(&self) -> ParishResult<Duration> {
        humantime::parse_duration(&self.admin_cache_ttl).map_err(|e| {
            ParishError::Config(format!(
                "Invalid admin_cache_ttl '{}': {}",
                self.admin_cache_ttl, e
            ))
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ParishResult<()> {
        let contents = format!(
            "\
# parish configuration

# JSON export of the events table:
# events_file = \"{}\"

# User ids allowed into the admin views:
# admins = [\"user-id\"]

# How long admin checks are cached:
# admin_cache_ttl = \"{}\"

# Port for parish-server:
# server_port = {}
",
            DEFAULT_EVENTS_FILE, DEFAULT_ADMIN_CACHE_TTL, DEFAULT_SERVER_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ParishError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ParishError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_loads_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parish/config.toml");

        ParishConfig::create_default_config(&path).unwrap();
        let config = ParishConfig::load_from(&path).unwrap();

        assert_eq!(config.events_file, PathBuf::from(DEFAULT_EVENTS_FILE));
        assert!(config.admins.is_empty());
        assert_eq!(config.admin_cache_ttl().unwrap(), Duration::from_secs(60));
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "events_file = \"/srv/events.json\"\nadmins = [\"pastor\"]\nadmin_cache_ttl = \"5m\"\nserver_port = 8080\n",
        )
        .unwrap();

        let config = ParishConfig::load_from(&path).unwrap();

        assert_eq!(config.events_path(), PathBuf::from("/srv/events.json"));
        assert_eq!(config.admins, vec!["pastor".to_string()]);
        assert_eq!(config.admin_cache_ttl().unwrap(), Duration::from_secs(300));
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn bad_ttl_is_config_error() {
        let config = ParishConfig {
            admin_cache_ttl: "soon".to_string(),
            ..ParishConfig::default()
        };
        assert!(matches!(config.admin_cache_ttl(), Err(ParishError::Config(_))));
    }
}
