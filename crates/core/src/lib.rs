#![warn(clippy::all, missing_docs)]

//! Core domain logic for the Online Steam terminal client.
//!
//! This crate hosts the data models, configuration handling, the Steam
//! Web API client, the search/pagination helpers, favorites persistence,
//! and the selection controller driven by the terminal UI.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod favorites;
pub mod lookup;
pub mod models;
pub mod pager;
pub mod search;
pub mod steam;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use controller::{AddOutcome, Controller, ListOrigin, RemoveOutcome, SelectionState};
pub use favorites::{FavoritesStore, FileFavoritesStore, MemoryFavoritesStore, WriteMode};
pub use lookup::{LookupOutcome, LookupRequest};
pub use models::GameRecord;
pub use pager::{PageBoundary, PageWindow};
pub use steam::{GameStatsSource, SourceError, SteamClient};
