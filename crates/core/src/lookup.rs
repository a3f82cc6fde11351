//! Player-count lookups dispatched off the UI thread.
//!
//! The controller hands out a [`LookupRequest`] tagged with a generation
//! number; the UI runs it on a background task and feeds the resulting
//! [`LookupOutcome`] back. Only the outcome for the latest generation is
//! displayed.

use std::sync::Arc;

use tracing::warn;

use crate::steam::{GameStatsSource, SourceError};

/// A pending player-count query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Sequence number assigned by the controller.
    pub generation: u64,
    /// Steam app id to query.
    pub appid: u64,
    /// Display name the user selected.
    pub name: String,
}

/// Result of running a [`LookupRequest`].
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    /// Generation of the originating request.
    pub generation: u64,
    /// Display name the user selected.
    pub name: String,
    /// Player count, `None` when the API had none, or the source failure.
    pub result: Result<Option<u64>, Arc<SourceError>>,
}

impl LookupRequest {
    /// Query `source` and wrap the answer with this request's generation.
    pub async fn run<S: GameStatsSource>(self, source: &S) -> LookupOutcome {
        let result = match source.player_count(self.appid).await {
            Ok(count) => Ok(count),
            Err(err) => {
                warn!(appid = self.appid, %err, "Player count lookup failed");
                Err(Arc::new(err))
            }
        };
        LookupOutcome {
            generation: self.generation,
            name: self.name,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameRecord;

    struct StubSource {
        count: Option<u64>,
        fail: bool,
    }

    impl GameStatsSource for StubSource {
        async fn fetch_catalog(&self) -> Result<Vec<GameRecord>, SourceError> {
            Ok(Vec::new())
        }

        async fn player_count(&self, _appid: u64) -> Result<Option<u64>, SourceError> {
            if self.fail {
                let err = serde_json::from_str::<u64>("not json").unwrap_err();
                return Err(SourceError::Malformed(err));
            }
            Ok(self.count)
        }
    }

    fn request() -> LookupRequest {
        LookupRequest {
            generation: 7,
            appid: 570,
            name: "Dota 2".to_string(),
        }
    }

    #[tokio::test]
    async fn successful_lookup_keeps_generation() {
        let source = StubSource {
            count: Some(512_000),
            fail: false,
        };
        let outcome = request().run(&source).await;
        assert_eq!(outcome.generation, 7);
        assert_eq!(outcome.name, "Dota 2");
        assert!(matches!(outcome.result, Ok(Some(512_000))));
    }

    #[tokio::test]
    async fn missing_count_is_not_an_error() {
        let source = StubSource {
            count: None,
            fail: false,
        };
        assert!(matches!(request().run(&source).await.result, Ok(None)));
    }

    #[tokio::test]
    async fn source_failure_keeps_error_kind() {
        let source = StubSource {
            count: None,
            fail: true,
        };
        let outcome = request().run(&source).await;
        let err = outcome.result.unwrap_err();
        assert!(matches!(err.as_ref(), SourceError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed response"));
    }
}
