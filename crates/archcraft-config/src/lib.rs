//! Configuration loading for the ArchCraft admin panel.
//! Reads archcraft.toml from the current directory or the path in ARCHCRAFT_CONFIG.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_ENV: &str = "ARCHCRAFT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "archcraft.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub minecraft: MinecraftConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    #[serde(default = "default_refresh_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3001))
}

fn default_refresh_secs() -> u64 {
    60
}

/// Relative to the workspace root, where `cargo run -p archcraft-web` starts.
fn default_static_dir() -> String {
    "crates/archcraft-web/static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            refresh_interval_secs: default_refresh_secs(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    /// Status refresh period. Zero is clamped to one second.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}

/// The game server the panel administers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinecraftConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_memory_gb")]
    pub memory_total_gb: u32,
    #[serde(default = "default_max_players")]
    pub max_players: u32,
}

fn default_address() -> String {
    "play.archcraft.example.com".to_string()
}

fn default_version() -> String {
    "Paper 1.16.5".to_string()
}

fn default_memory_gb() -> u32 {
    4
}

fn default_max_players() -> u32 {
    20
}

impl Default for MinecraftConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            version: default_version(),
            memory_total_gb: default_memory_gb(),
            max_players: default_max_players(),
        }
    }
}

/// Where registry records come from. Unset URLs mean an empty source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub projects_url: Option<String>,
    pub users_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Owner recorded on projects created through the form.
    #[serde(default = "default_current_user")]
    pub current_user: String,
}

fn default_current_user() -> String {
    "Current User".to_string()
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { current_user: default_current_user() }
    }
}

impl Config {
    /// Load configuration from archcraft.toml.
    /// Checks ARCHCRAFT_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing or unreadable file yields defaults.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.refresh_interval_secs, 60);
        assert_eq!(config.minecraft.address, "play.archcraft.example.com");
        assert_eq!(config.minecraft.max_players, 20);
        assert_eq!(config.panel.current_user, "Current User");
        assert!(config.data.projects_url.is_none());
        assert_eq!(config.server.static_dir, "crates/archcraft-web/static");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = Config::parse(r#"
            [server]
            bind = "0.0.0.0:8080"

            [minecraft]
            version = "Paper 1.20.4"

            [data]
            users_url = "http://localhost:9000/users"
        "#).unwrap();
        assert_eq!(config.server.bind.port(), 8080);
        assert_eq!(config.server.refresh_interval_secs, 60);
        assert_eq!(config.minecraft.version, "Paper 1.20.4");
        assert_eq!(config.minecraft.memory_total_gb, 4);
        assert_eq!(config.data.users_url.as_deref(), Some("http://localhost:9000/users"));
    }

    #[test]
    fn test_zero_interval_clamped() {
        let server = ServerConfig { refresh_interval_secs: 0, ..ServerConfig::default() };
        assert_eq!(server.refresh_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = Config::load_from("/nonexistent/archcraft.toml").unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(Config::parse("[server\nbind = ").is_err());
    }
}
