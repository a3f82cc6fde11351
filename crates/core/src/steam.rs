//! Steam Web API client.

use std::future::Future;

use anyhow::Context;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{config::AppConfig, models::GameRecord};

/// Failures talking to the game statistics API.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-success HTTP status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Status code returned.
        status: u16,
    },
    /// Body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read-only source of the game catalog and live player counts.
pub trait GameStatsSource: Send + Sync {
    /// Fetch every known game.
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<GameRecord>, SourceError>> + Send;

    /// Current players for `appid`, or `None` when the API reports no count.
    fn player_count(
        &self,
        appid: u64,
    ) -> impl Future<Output = Result<Option<u64>, SourceError>> + Send;
}

#[derive(Debug, Deserialize)]
struct AppListResponse {
    applist: AppList,
}

#[derive(Debug, Deserialize)]
struct AppList {
    apps: Vec<GameRecord>,
}

#[derive(Debug, Deserialize)]
struct PlayerCountResponse {
    response: PlayerCountBody,
}

#[derive(Debug, Deserialize)]
struct PlayerCountBody {
    #[serde(default)]
    player_count: Option<u64>,
}

/// Unauthenticated client for the public Steam endpoints.
#[derive(Debug, Clone)]
pub struct SteamClient {
    client: Client,
    catalog_url: String,
    player_count_url: String,
}

impl SteamClient {
    /// Build a client using the endpoints and timeout from `config`.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_client(
            client,
            config.catalog_url.clone(),
            config.player_count_url.clone(),
        ))
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_client(
        client: Client,
        catalog_url: impl Into<String>,
        player_count_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            catalog_url: catalog_url.into(),
            player_count_url: player_count_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, SourceError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl GameStatsSource for SteamClient {
    async fn fetch_catalog(&self) -> Result<Vec<GameRecord>, SourceError> {
        let response: AppListResponse = self.get_json(&self.catalog_url, &[]).await?;
        info!(count = response.applist.apps.len(), "Fetched Steam app list");
        Ok(response.applist.apps)
    }

    async fn player_count(&self, appid: u64) -> Result<Option<u64>, SourceError> {
        let response: PlayerCountResponse = self
            .get_json(&self.player_count_url, &[("appid", appid.to_string())])
            .await?;
        debug!(appid, count = ?response.response.player_count, "Fetched player count");
        Ok(response.response.player_count)
    }
}
