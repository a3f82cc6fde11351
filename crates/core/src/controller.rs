//! Search, pagination, selection and favorites state for the client.
//!
//! [`Controller`] owns all state the UI renders. It performs no network I/O:
//! selections return a [`LookupRequest`] for the caller to run, and the
//! answer comes back through [`Controller::complete_lookup`].

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    catalog::Catalog,
    config::AppConfig,
    favorites::FavoritesStore,
    lookup::{LookupOutcome, LookupRequest},
    models::GameRecord,
    pager::{PageBoundary, PageWindow, Pager},
    search,
};

/// Label of the add button in its resting state.
pub const ADD_LABEL: &str = "Add to favorite";
/// Label shown briefly when the selection is already a favorite.
pub const ALREADY_ADDED_LABEL: &str = "Already added!";

/// Which list produced the latest selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrigin {
    /// The paged search results.
    Search,
    /// The favorites list.
    Favorites,
}

/// Button enablement state derived from the latest selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing selected yet; both favorite actions disabled.
    Idle,
    /// A search result is selected; only "add" is enabled.
    SearchSelected,
    /// A favorite is selected; only "remove" is enabled.
    FavoriteSelected,
}

/// The most recent selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    /// Display name that was selected.
    pub name: Option<String>,
    /// App id resolved from the name, if the catalog knows it.
    pub appid: Option<u64>,
    /// List the selection came from.
    pub origin: Option<ListOrigin>,
}

/// Result of [`Controller::add_to_favorites`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The id was appended to the store.
    Added(u64),
    /// The name is already listed; nothing was written.
    AlreadyAdded,
    /// The selected name has no catalog entry; nothing was written.
    NotFound,
    /// No search result is selected.
    Disabled,
}

/// Result of [`Controller::remove_from_favorites`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The first occurrence of the id was removed.
    Removed(u64),
    /// The id was not stored; the store is unchanged.
    NotPresent,
    /// No favorite is selected.
    Disabled,
}

/// Tunables the controller needs from [`AppConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ControllerSettings {
    /// Search results per page.
    pub page_size: usize,
    /// Minimum query length before searching.
    pub min_query_len: usize,
    /// Last-page rule.
    pub boundary: PageBoundary,
    /// Lifetime of the "Already added!" label.
    pub flash_duration: Duration,
    /// Report missing player counts instead of ignoring them.
    pub show_unavailable_counts: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl ControllerSettings {
    /// Extract controller settings from the application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            page_size: config.page_size,
            min_query_len: config.min_query_len,
            boundary: config.page_boundary,
            flash_duration: config.flash_duration(),
            show_unavailable_counts: config.show_unavailable_counts,
        }
    }
}

#[derive(Debug, Clone)]
struct Flash {
    message: String,
    expires_at: Instant,
}

/// Application state behind the terminal UI.
pub struct Controller {
    catalog: Catalog,
    store: Box<dyn FavoritesStore>,
    settings: ControllerSettings,
    query: String,
    results: Vec<GameRecord>,
    search_active: bool,
    pager: Pager,
    favorites: Vec<String>,
    selection: SelectionContext,
    generation: u64,
    output: Option<String>,
    flash: Option<Flash>,
}

impl Controller {
    /// Controller with an empty catalog; call [`Controller::set_catalog`] once it is fetched.
    pub fn new(store: Box<dyn FavoritesStore>, settings: ControllerSettings) -> Self {
        Self {
            catalog: Catalog::default(),
            store,
            settings,
            query: String::new(),
            results: Vec::new(),
            search_active: false,
            pager: Pager::new(settings.page_size, settings.boundary),
            favorites: Vec::new(),
            selection: SelectionContext::default(),
            generation: 0,
            output: None,
            flash: None,
        }
    }

    /// Install the fetched catalog, re-run the current query and reload favorites.
    pub fn set_catalog(&mut self, catalog: Catalog) -> Result<()> {
        info!(games = catalog.len(), "Catalog installed");
        self.catalog = catalog;
        let query = self.query.clone();
        self.set_query(&query);
        self.reload_favorites()
    }

    /// Settings the controller was built with.
    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Update the query. Returns whether search is active for it.
    ///
    /// Short queries clear the results and disable paging; otherwise the
    /// results are recomputed and the pager returns to the first page.
    pub fn set_query(&mut self, query: &str) -> bool {
        self.query = query.to_string();
        self.pager.reset();
        if !search::is_active(query, self.settings.min_query_len) {
            self.search_active = false;
            self.results.clear();
            return false;
        }
        self.results = self.catalog.filter(query);
        self.search_active = true;
        debug!(query, matches = self.results.len(), "Search updated");
        true
    }

    /// Whether the current query is long enough to search.
    pub fn search_active(&self) -> bool {
        self.search_active
    }

    /// Every match for the current query.
    pub fn results(&self) -> &[GameRecord] {
        &self.results
    }

    /// Current zero-based page.
    pub fn page_index(&self) -> usize {
        self.pager.page_index()
    }

    /// Records on the current page.
    pub fn page_window(&self) -> PageWindow<'_> {
        self.pager.window(&self.results)
    }

    /// Whether "next page" is available.
    pub fn has_next(&self) -> bool {
        self.search_active && self.page_window().has_next
    }

    /// Whether "previous page" is available.
    pub fn has_previous(&self) -> bool {
        self.search_active && self.page_window().has_previous
    }

    /// Move to the next page when one exists.
    pub fn next_page(&mut self) -> bool {
        self.search_active && self.pager.next(&self.results)
    }

    /// Move to the previous page when one exists.
    pub fn previous_page(&mut self) -> bool {
        self.search_active && self.pager.previous(&self.results)
    }

    /// Names currently shown in the favorites list.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Latest selection.
    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }

    /// Enablement state of the favorite actions.
    pub fn selection_state(&self) -> SelectionState {
        match self.selection.origin {
            None => SelectionState::Idle,
            Some(ListOrigin::Search) => SelectionState::SearchSelected,
            Some(ListOrigin::Favorites) => SelectionState::FavoriteSelected,
        }
    }

    /// "Add to favorite" is enabled.
    pub fn add_enabled(&self) -> bool {
        self.selection_state() == SelectionState::SearchSelected
    }

    /// "Delete from favorite" is enabled.
    pub fn remove_enabled(&self) -> bool {
        self.selection_state() == SelectionState::FavoriteSelected
    }

    /// Label for the add button at `now`.
    pub fn add_button_label(&self, now: Instant) -> &str {
        match &self.flash {
            Some(flash) if now < flash.expires_at => flash.message.as_str(),
            _ => ADD_LABEL,
        }
    }

    /// Drop the transient label once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self
            .flash
            .as_ref()
            .is_some_and(|flash| now >= flash.expires_at)
        {
            self.flash = None;
        }
    }

    /// Text of the output panel.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Select a search result and start its player-count lookup.
    pub fn select_from_search(&mut self, name: &str) -> Option<LookupRequest> {
        self.select(name, ListOrigin::Search)
    }

    /// Select a favorite and start its player-count lookup.
    pub fn select_from_favorites(&mut self, name: &str) -> Option<LookupRequest> {
        self.select(name, ListOrigin::Favorites)
    }

    fn select(&mut self, name: &str, origin: ListOrigin) -> Option<LookupRequest> {
        self.selection = SelectionContext {
            name: Some(name.to_string()),
            appid: self.catalog.appid_by_name(name),
            origin: Some(origin),
        };
        debug!(name, ?origin, "Selection changed");
        self.lookup_player_count(name)
    }

    /// Look up a typed game name without touching the selection.
    pub fn submit_query(&mut self, name: &str) -> Option<LookupRequest> {
        self.lookup_player_count(name.trim())
    }

    /// Resolve `name` and issue a lookup request with a fresh generation.
    ///
    /// Unknown names set the "no such game" output and return `None`. Either
    /// way the generation advances, so older in-flight results are dropped.
    pub fn lookup_player_count(&mut self, name: &str) -> Option<LookupRequest> {
        self.generation += 1;
        let Some(appid) = self.catalog.appid_by_name(name) else {
            self.output = Some(format!("There is no such game with name: {name}."));
            return None;
        };
        Some(LookupRequest {
            generation: self.generation,
            appid,
            name: name.to_string(),
        })
    }

    /// Apply a finished lookup. Returns `false` when a newer lookup superseded it.
    pub fn complete_lookup(&mut self, outcome: LookupOutcome) -> bool {
        if outcome.generation != self.generation {
            debug!(
                stale = outcome.generation,
                latest = self.generation,
                "Dropping superseded lookup"
            );
            return false;
        }
        match outcome.result {
            Ok(Some(count)) => {
                self.output = Some(format!("{} — {count} players online!", outcome.name));
            }
            Ok(None) => {
                if self.settings.show_unavailable_counts {
                    self.output = Some(format!("{} — player count unavailable", outcome.name));
                }
            }
            Err(err) => {
                self.output = Some(format!(
                    "Failed to fetch player count for {}: {err}",
                    outcome.name
                ));
            }
        }
        true
    }

    /// Add the selected search result to the favorites.
    pub fn add_to_favorites(&mut self, now: Instant) -> Result<AddOutcome> {
        if !self.add_enabled() {
            return Ok(AddOutcome::Disabled);
        }
        let Some(name) = self.selection.name.clone() else {
            return Ok(AddOutcome::Disabled);
        };
        if self.favorites.iter().any(|existing| *existing == name) {
            self.flash = Some(Flash {
                message: ALREADY_ADDED_LABEL.to_string(),
                expires_at: now + self.settings.flash_duration,
            });
            return Ok(AddOutcome::AlreadyAdded);
        }
        let Some(appid) = self.catalog.appid_by_name(&name) else {
            self.output = Some(format!("There is no such game with name: {name}."));
            return Ok(AddOutcome::NotFound);
        };

        let mut ids = self.store.load_all()?;
        ids.push(appid.to_string());
        self.store.save_all(&ids)?;
        self.favorites.push(name.clone());
        info!(appid, name = %name, "Added favorite");
        Ok(AddOutcome::Added(appid))
    }

    /// Remove the selected favorite from the store and reload the list.
    pub fn remove_from_favorites(&mut self) -> Result<RemoveOutcome> {
        if !self.remove_enabled() {
            return Ok(RemoveOutcome::Disabled);
        }
        let Some(appid) = self.selection.appid else {
            return Ok(RemoveOutcome::Disabled);
        };

        let id = appid.to_string();
        let mut ids = self.store.load_all()?;
        let outcome = match ids.iter().position(|stored| *stored == id) {
            Some(index) => {
                ids.remove(index);
                self.store.save_all(&ids)?;
                info!(appid, "Removed favorite");
                RemoveOutcome::Removed(appid)
            }
            None => RemoveOutcome::NotPresent,
        };
        self.reload_favorites()?;
        Ok(outcome)
    }

    /// Re-read the store and resolve ids to names, skipping unknown ids.
    pub fn reload_favorites(&mut self) -> Result<()> {
        let ids = self.store.load_all()?;
        self.favorites = ids
            .iter()
            .filter_map(|id| self.catalog.name_by_id(id).map(str::to_string))
            .collect();
        Ok(())
    }
}
