//! Application configuration backed by `config.toml` and environment overrides.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{favorites::WriteMode, pager::PageBoundary};

/// Directory name under the user's config directory.
pub const APP_DIR: &str = "online-steam";
/// Prefix for environment overrides, e.g. `ONLINE_STEAM__PAGE_SIZE=20`.
pub const ENV_PREFIX: &str = "ONLINE_STEAM";

const DEFAULT_CATALOG_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";
const DEFAULT_PLAYER_COUNT_URL: &str =
    "https://api.steampowered.com/ISteamUserStats/GetNumberOfCurrentPlayers/v1/";

const DEFAULT_CONFIG: &str = r#"# Online Steam configuration.
# Every key is optional; environment variables named ONLINE_STEAM__<KEY>
# take precedence over this file.

# catalog_url = "https://api.steampowered.com/ISteamApps/GetAppList/v2/"
# player_count_url = "https://api.steampowered.com/ISteamUserStats/GetNumberOfCurrentPlayers/v1/"
# request_timeout_secs = 15

# favorites_path = "/path/to/favorites.txt"
# "overwrite" rewrites the file in place, "atomic" writes a temp file and renames it.
# favorites_write_mode = "overwrite"

# page_size = 10
# min_query_len = 3
# flash_duration_ms = 1000

# "floor" keeps a trailing empty page when the result count is a multiple of
# page_size; "exact" stops at the last non-empty page.
# page_boundary = "floor"

# Show "player count unavailable" instead of leaving the output untouched.
# show_unavailable_counts = false

# log_dir = "/path/to/logs"
"#;

/// Runtime settings for the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Endpoint returning the full app list.
    pub catalog_url: String,
    /// Endpoint returning the current player count for `?appid=`.
    pub player_count_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Line-delimited favorites file.
    pub favorites_path: PathBuf,
    /// How the favorites file is rewritten on mutation.
    pub favorites_write_mode: WriteMode,
    /// Number of search results per page.
    pub page_size: usize,
    /// Minimum query length before search kicks in.
    pub min_query_len: usize,
    /// How long transient button labels stay visible.
    pub flash_duration_ms: u64,
    /// How the last reachable page is computed.
    pub page_boundary: PageBoundary,
    /// Display an explicit message when Steam returns no player count.
    pub show_unavailable_counts: bool,
    /// Directory for the log file; defaults to `./logs`.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            player_count_url: DEFAULT_PLAYER_COUNT_URL.to_string(),
            request_timeout_secs: 15,
            favorites_path: app_dir().join("favorites.txt"),
            favorites_write_mode: WriteMode::default(),
            page_size: 10,
            min_query_len: 3,
            flash_duration_ms: 1000,
            page_boundary: PageBoundary::default(),
            show_unavailable_counts: false,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location plus environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load configuration from an explicit file plus environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: AppConfig = settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Timeout applied to every HTTP request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Lifetime of the "Already added!" label.
    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_duration_ms)
    }
}

/// Directory holding the config file and default favorites.
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Default location of `config.toml`.
pub fn config_path() -> PathBuf {
    app_dir().join("config.toml")
}

/// Write a commented default config file if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    ensure_default_config_at(config_path())
}

/// Write a commented default config file at `path` if it is missing.
pub fn ensure_default_config_at(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    info!(path = %path.display(), "Wrote default configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_file_loads_to_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("config.toml");
        ensure_default_config_at(&path)?;
        assert!(path.exists());

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.page_size, 10);
        assert_eq!(config.min_query_len, 3);
        assert_eq!(config.page_boundary, PageBoundary::Floor);
        assert_eq!(config.favorites_write_mode, WriteMode::Overwrite);
        assert_eq!(config.flash_duration(), Duration::from_secs(1));
        assert!(!config.show_unavailable_counts);
        Ok(())
    }

    #[test]
    fn existing_file_is_not_overwritten() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 25\n")?;
        ensure_default_config_at(&path)?;
        assert_eq!(fs::read_to_string(&path)?, "page_size = 25\n");
        Ok(())
    }

    #[test]
    fn file_values_override_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
page_size = 5
page_boundary = "exact"
favorites_write_mode = "atomic"
show_unavailable_counts = true
favorites_path = "/tmp/favs.txt"
"#,
        )?;

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.page_size, 5);
        assert_eq!(config.page_boundary, PageBoundary::Exact);
        assert_eq!(config.favorites_write_mode, WriteMode::Atomic);
        assert!(config.show_unavailable_counts);
        assert_eq!(config.favorites_path, PathBuf::from("/tmp/favs.txt"));
        Ok(())
    }

    #[test]
    fn zero_page_size_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 0\n")?;
        assert!(AppConfig::load_from(&path).is_err());
        Ok(())
    }
}
