//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.surahs/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DetailStrategy;
use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_EDITION, DEFAULT_TIMEOUT_SECS};
use crate::core::state::LastRead;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SurahsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub reader_name: Option<String>,
    pub last_read_chapter: Option<u32>,
    pub last_read_ayah: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub edition: Option<String>,
    pub timeout_secs: Option<u64>,
    pub detail_strategy: Option<DetailStrategy>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    pub enabled: Option<bool>,
    pub dir: Option<String>,
}

/// Values given on the command line. `None`/`false` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub edition: Option<String>,
    pub detail_strategy: Option<DetailStrategy>,
    pub cache_dir: Option<PathBuf>,
    pub no_cache: bool,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub reader_name: String,
    pub last_read: LastRead,
    pub base_url: String,
    pub edition: String,
    pub timeout: Duration,
    pub detail_strategy: DetailStrategy,
    /// `None` means keep the chapter list in memory only.
    pub cache_dir: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.surahs`.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".surahs"))
}

/// Returns the path to `~/.surahs/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.surahs/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SurahsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SurahsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SurahsConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SurahsConfig, ConfigError> {
    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(path);
        return Ok(SurahsConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SurahsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Surahs Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# reader_name = "Your Name"          # Shown under the greeting
# last_read_chapter = 1              # "Last Read" card
# last_read_ayah = 1

# [api]
# base_url = "https://api.alquran.cloud/v1"   # Or set SURAHS_API_BASE_URL
# edition = "en.asad"                         # Or set SURAHS_EDITION
# timeout_secs = 30
# detail_strategy = "corpus"         # "corpus" (whole translation) or "chapter"

# [cache]
# enabled = true
# dir = "/home/you/.surahs/cache"    # Or set SURAHS_CACHE_DIR
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SurahsConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &SurahsConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("SURAHS_API_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Edition: CLI → env → config → default
    let edition = cli
        .edition
        .clone()
        .or_else(|| env("SURAHS_EDITION"))
        .or_else(|| config.api.edition.clone())
        .unwrap_or_else(|| DEFAULT_EDITION.to_string());

    let detail_strategy = cli
        .detail_strategy
        .or(config.api.detail_strategy)
        .unwrap_or_default();

    let timeout = Duration::from_secs(config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

    // Cache dir: disabled wins; otherwise CLI → env → config → ~/.surahs/cache
    let cache_enabled = !cli.no_cache && config.cache.enabled.unwrap_or(true);
    let cache_dir = if cache_enabled {
        cli.cache_dir
            .clone()
            .or_else(|| env("SURAHS_CACHE_DIR").map(PathBuf::from))
            .or_else(|| config.cache.dir.as_ref().map(PathBuf::from))
            .or_else(|| app_dir().map(|d| d.join("cache")))
    } else {
        None
    };

    let defaults = LastRead::default();
    let last_read = LastRead {
        chapter: config.general.last_read_chapter.unwrap_or(defaults.chapter),
        ayah: config.general.last_read_ayah.unwrap_or(defaults.ayah),
    };

    ResolvedConfig {
        reader_name: config.general.reader_name.clone().unwrap_or_default(),
        last_read,
        base_url,
        edition,
        timeout,
        detail_strategy,
        cache_dir,
    }
}
