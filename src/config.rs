// Configuration module for reelpick
// Handles config file discovery and TOML configuration

use serde::Deserialize;
use std::path::PathBuf;

const APP_NAME: &str = "reelpick";
const CONFIG_FILENAME: &str = "config.toml";

/// TOML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Server configuration
    pub server: ServerConfig,

    /// TMDB provider configuration
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server port (default: 8097)
    pub port: u16,

    /// Bind address (default: 0.0.0.0)
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8097,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// TMDB API bearer token; without it every discover request fails
    /// upstream and the feed stays empty
    pub token: Option<String>,
}

/// Application configuration - combines TOML file with environment overrides
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server port
    pub port: u16,

    /// Bind address
    pub bind_address: String,

    /// TMDB API bearer token (optional)
    pub tmdb_token: Option<String>,
}

impl AppConfig {
    /// Load configuration from TOML file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (REELPICK_PORT, REELPICK_BIND_ADDRESS, TMDB_TOKEN)
    /// 2. TOML config file
    /// 3. Default values
    pub fn load() -> Self {
        let config_dir = Self::find_config_dir();
        let config_file = Self::load_config_file(&config_dir);

        Self {
            port: Self::env_port().unwrap_or(config_file.server.port),
            bind_address: std::env::var("REELPICK_BIND_ADDRESS")
                .unwrap_or(config_file.server.bind_address),
            tmdb_token: std::env::var("TMDB_TOKEN").ok().or(config_file.tmdb.token),
        }
    }

    /// Find the config directory (for locating config.toml)
    fn find_config_dir() -> PathBuf {
        // Environment variable takes priority
        if let Ok(path) = std::env::var("REELPICK_CONFIG_DIR") {
            return PathBuf::from(path);
        }

        // Then XDG config dir
        if let Some(dir) = dirs::config_dir() {
            return dir.join(APP_NAME);
        }

        // Fallback to current directory
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    /// Load and parse the TOML config file
    fn load_config_file(config_dir: &std::path::Path) -> ConfigFile {
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(
                "No config file found at {}, using defaults",
                config_path.display()
            );
            return ConfigFile::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        config_path.display(),
                        e
                    );
                    ConfigFile::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {}. Using defaults.",
                    config_path.display(),
                    e
                );
                ConfigFile::default()
            }
        }
    }

    fn env_port() -> Option<u16> {
        std::env::var("REELPICK_PORT").ok().and_then(|v| v.parse().ok())
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!("Listening on {}:{}", self.bind_address, self.port);
        if self.tmdb_token.is_some() {
            tracing::info!("TMDB token configured");
        } else {
            tracing::warn!("No TMDB token configured; the discover feed will stay empty");
        }
    }
}
