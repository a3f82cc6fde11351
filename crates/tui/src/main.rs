mod app;

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use online_steam_core::{
    config::{self, AppConfig},
    controller::ControllerSettings,
    Controller, FileFavoritesStore, SteamClient,
};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // `log_dir` is a config value, so the file is read before the subscriber
    // exists. A load failure is logged once logging is up.
    let loaded = AppConfig::load();
    let configured_dir = loaded.as_ref().ok().and_then(|config| config.log_dir.clone());
    init_logging(resolve_log_dir(configured_dir)?)?;

    let config = loaded.map_err(|err| {
        tracing::error!(path = %config::config_path().display(), "Failed to load configuration: {err:#}");
        err
    })?;
    config::ensure_default_config()?;

    let client = SteamClient::new(&config)?;
    let store = FileFavoritesStore::new(config.favorites_path.clone(), config.favorites_write_mode);
    tracing::info!(favorites = %store.path().display(), "Starting Online Steam");
    let controller = Controller::new(Box::new(store), ControllerSettings::from_config(&config));

    let mut app = app::OnlineSteamApp::new(controller, client);
    app.run().await
}

fn resolve_log_dir(configured: Option<PathBuf>) -> Result<PathBuf> {
    match configured {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?.join("logs")),
    }
}

fn init_logging(log_dir: PathBuf) -> Result<()> {
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let log_path = log_dir.join("online-steam.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // The terminal is in the alternate screen while running, so only the file gets events.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(Mutex::new(log_file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn configured_log_dir_wins() -> Result<()> {
        let dir = tempdir()?;
        assert_eq!(resolve_log_dir(Some(dir.path().to_path_buf()))?, dir.path());
        Ok(())
    }

    #[test]
    fn log_dir_defaults_to_working_directory() -> Result<()> {
        assert_eq!(resolve_log_dir(None)?, std::env::current_dir()?.join("logs"));
        Ok(())
    }
}
