use std::{io, thread, time::Duration, time::Instant};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use online_steam_core::{
    AddOutcome, Catalog, Controller, GameRecord, GameStatsSource, LookupOutcome, LookupRequest,
    RemoveOutcome, SourceError, SteamClient,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, List, ListItem, ListState, Paragraph, Wrap,
    },
    Frame, Terminal,
};
use tokio::{spawn, sync::mpsc};
use tracing::{error, info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);
const NO_RESULTS: &str = "No suggested games";
const REMOVE_LABEL: &str = "Delete from favorite";

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    accent_alt: Color,
    muted: Color,
    selection_bg: Color,
    selection_fg: Color,
    warning: Color,
    danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Magenta,
            accent_alt: Color::LightBlue,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Query,
    Results,
    Favorites,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Query => Focus::Results,
            Focus::Results => Focus::Favorites,
            Focus::Favorites => Focus::Query,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Query => Focus::Favorites,
            Focus::Results => Focus::Query,
            Focus::Favorites => Focus::Results,
        }
    }
}

enum AppEvent {
    Input(Event),
    Tick,
    CatalogLoaded(Result<Vec<GameRecord>, SourceError>),
    LookupFinished(LookupOutcome),
}

/// Terminal frontend around the [`Controller`].
pub struct OnlineSteamApp {
    controller: Controller,
    client: SteamClient,
    state: UiState,
    theme: Theme,
    event_tx: Option<mpsc::Sender<AppEvent>>,
}

impl OnlineSteamApp {
    pub fn new(controller: Controller, client: SteamClient) -> Self {
        Self {
            controller,
            client,
            state: UiState::default(),
            theme: Theme::default(),
            event_tx: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if let Err(err) = self.controller.reload_favorites() {
            error!(?err, "Failed to read favorites");
            self.state.set_status(format!("Failed to read favorites: {err}"));
        }

        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx.clone());
        self.event_tx = Some(event_tx);
        self.start_catalog_load();

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.state.should_quit {
                break;
            }
            let maybe_event = event_rx.recv().await;
            if !self.process_app_event(maybe_event) || self.state.should_quit {
                break;
            }
        }

        restore_terminal(&mut terminal)?;
        self.event_tx = None;
        Ok(())
    }

    fn process_app_event(&mut self, maybe_event: Option<AppEvent>) -> bool {
        match maybe_event {
            Some(AppEvent::Input(event)) => {
                if let Err(err) = self.handle_input(event) {
                    error!(?err, "Action failed");
                    self.state.set_status(format!("Error: {err}"));
                }
                true
            }
            Some(AppEvent::Tick) => {
                self.controller.tick(Instant::now());
                true
            }
            Some(AppEvent::CatalogLoaded(result)) => {
                self.handle_catalog_loaded(result);
                true
            }
            Some(AppEvent::LookupFinished(outcome)) => {
                let generation = outcome.generation;
                if !self.controller.complete_lookup(outcome) {
                    info!(generation, "Ignored superseded lookup result");
                }
                true
            }
            None => false,
        }
    }

    fn start_catalog_load(&mut self) {
        let Some(sender) = self.event_tx.clone() else {
            self.state
                .set_status("Internal error: event channel unavailable".to_string());
            error!("event_channel_missing");
            return;
        };
        self.state.loading = true;
        self.state.set_status("Loading list of games...".to_string());
        let client = self.client.clone();
        spawn(async move {
            let result = client.fetch_catalog().await;
            let _ = sender.send(AppEvent::CatalogLoaded(result)).await;
        });
    }

    fn handle_catalog_loaded(&mut self, result: Result<Vec<GameRecord>, SourceError>) {
        self.state.loading = false;
        match result {
            Ok(games) => {
                let catalog = Catalog::new(games);
                let total = catalog.len();
                let stamp = catalog
                    .fetched_at()
                    .map(|at| at.with_timezone(&Local).format("%H:%M:%S").to_string())
                    .unwrap_or_default();
                match self.controller.set_catalog(catalog) {
                    Ok(()) => self
                        .state
                        .set_status(format!("Loaded {total} games at {stamp}.")),
                    Err(err) => {
                        error!(?err, "Failed to read favorites after catalog load");
                        self.state
                            .set_status(format!("Loaded {total} games but favorites failed: {err}"));
                    }
                }
                self.state.clamp_results(self.controller.page_window().items.len());
                self.state.clamp_favorites(self.controller.favorites().len());
            }
            Err(err) => {
                error!(%err, "Failed to load game list");
                self.state
                    .set_status(format!("Failed to load list of games: {err}"));
            }
        }
    }

    fn dispatch_lookup(&mut self, request: Option<LookupRequest>) {
        let Some(request) = request else {
            return;
        };
        let Some(sender) = self.event_tx.clone() else {
            error!("event_channel_missing");
            return;
        };
        info!(appid = request.appid, name = %request.name, generation = request.generation, "Looking up player count");
        let client = self.client.clone();
        spawn(async move {
            let outcome = request.run(&client).await;
            let _ = sender.send(AppEvent::LookupFinished(outcome)).await;
        });
    }

    fn handle_input(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                Ok(())
            }
            Event::Key(_)
            | Event::Resize(_, _)
            | Event::FocusGained
            | Event::FocusLost
            | Event::Paste(_) => Ok(()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.state.should_quit = true;
            return Ok(());
        }
        match key.code {
            KeyCode::Esc => {
                self.state.should_quit = true;
                return Ok(());
            }
            KeyCode::Tab => {
                self.state.focus = self.state.focus.next();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.focus = self.state.focus.previous();
                return Ok(());
            }
            _ => {}
        }
        match self.state.focus {
            Focus::Query => self.handle_query_key(key),
            Focus::Results => self.handle_results_key(key),
            Focus::Favorites => self.handle_favorites_key(key),
        }
    }

    fn handle_query_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                    self.state.input.push(c);
                    self.on_query_changed();
                }
            }
            KeyCode::Backspace => {
                if self.state.input.pop().is_some() {
                    self.on_query_changed();
                }
            }
            KeyCode::Enter => {
                let typed = self.state.input.clone();
                let request = self.controller.submit_query(&typed);
                self.dispatch_lookup(request);
            }
            KeyCode::Down => self.state.focus = Focus::Results,
            _ => {}
        }
        Ok(())
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Result<()> {
        let visible = self.controller.page_window().items.len();
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => self.state.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.move_results(1, visible),
            KeyCode::Char('k') | KeyCode::Up => {
                if self.state.result_cursor == 0 {
                    self.state.focus = Focus::Query;
                } else {
                    self.state.move_results(-1, visible);
                }
            }
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => self.next_page(),
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => self.previous_page(),
            KeyCode::Char('/') => self.state.focus = Focus::Query,
            KeyCode::Char('a') => self.add_to_favorites()?,
            KeyCode::Enter => {
                let selected = self
                    .controller
                    .page_window()
                    .items
                    .get(self.state.result_cursor)
                    .map(|game| game.name.clone());
                if let Some(name) = selected {
                    let request = self.controller.select_from_search(&name);
                    self.dispatch_lookup(request);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_favorites_key(&mut self, key: KeyEvent) -> Result<()> {
        let total = self.controller.favorites().len();
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => self.state.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.move_favorites(1, total),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_favorites(-1, total),
            KeyCode::Char('/') => self.state.focus = Focus::Query,
            KeyCode::Char('a') => self.add_to_favorites()?,
            KeyCode::Char('d') | KeyCode::Delete => self.remove_from_favorites()?,
            KeyCode::Enter => {
                let selected = self
                    .controller
                    .favorites()
                    .get(self.state.favorite_cursor)
                    .cloned();
                if let Some(name) = selected {
                    let request = self.controller.select_from_favorites(&name);
                    self.dispatch_lookup(request);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !area_contains(self.state.results_area, mouse.column, mouse.row) {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.next_page(),
            MouseEventKind::ScrollUp => self.previous_page(),
            _ => {}
        }
    }

    fn on_query_changed(&mut self) {
        let query = self.state.input.clone();
        let active = self.controller.set_query(&query);
        self.state.result_cursor = 0;
        if active {
            self.state
                .set_status(format!("{} matching games", self.controller.results().len()));
        } else if self.state.loading {
            self.state.set_status("Loading list of games...".to_string());
        } else {
            self.state.set_status(format!(
                "Type at least {} characters to search",
                self.controller.settings().min_query_len
            ));
        }
    }

    fn next_page(&mut self) {
        if self.controller.next_page() {
            self.state.result_cursor = 0;
        }
    }

    fn previous_page(&mut self) {
        if self.controller.previous_page() {
            self.state.result_cursor = 0;
        }
    }

    fn add_to_favorites(&mut self) -> Result<()> {
        match self.controller.add_to_favorites(Instant::now())? {
            AddOutcome::Added(appid) => {
                let name = self.controller.selection().name.clone().unwrap_or_default();
                info!(appid, name = %name, "Favorite added from UI");
                self.state.set_status(format!("Added {name} to favorites"));
            }
            AddOutcome::AlreadyAdded => {}
            AddOutcome::NotFound => {
                warn!("Selected game vanished from catalog");
            }
            AddOutcome::Disabled => {
                self.state
                    .set_status("Select a search result first".to_string());
            }
        }
        Ok(())
    }

    fn remove_from_favorites(&mut self) -> Result<()> {
        match self.controller.remove_from_favorites()? {
            RemoveOutcome::Removed(_) => {
                let name = self.controller.selection().name.clone().unwrap_or_default();
                self.state.set_status(format!("Removed {name} from favorites"));
            }
            RemoveOutcome::NotPresent => {
                self.state
                    .set_status("Game is not in the favorites file".to_string());
            }
            RemoveOutcome::Disabled => {
                self.state.set_status("Select a favorite first".to_string());
            }
        }
        self.state
            .clamp_favorites(self.controller.favorites().len());
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let size = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(size);

        self.render_input(frame, chunks[0]);
        self.render_status(frame, chunks[1]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(52), Constraint::Min(20)])
            .split(chunks[2]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(body[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(5)])
            .split(body[1]);

        self.render_page_buttons(frame, left[0]);
        self.render_results(frame, left[1]);
        self.render_favorite_buttons(frame, left[2]);
        self.render_output(frame, right[0]);
        self.render_favorites(frame, right[1]);
        self.render_help(frame, chunks[3]);
    }

    fn focus_style(&self, focus: Focus) -> Style {
        if self.state.focus == focus {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(self.theme.muted)
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let text = if self.state.input.is_empty() && self.state.focus != Focus::Query {
            Line::from(Span::styled(
                "Enter a game name...",
                Style::default().fg(self.theme.muted),
            ))
        } else {
            Line::from(Span::styled(
                self.state.input.clone(),
                Style::default().fg(self.theme.primary_fg),
            ))
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.focus_style(Focus::Query))
            .title("Search");
        frame.render_widget(Paragraph::new(text).block(block), area);

        if self.state.focus == Focus::Query {
            let width = self.state.input.chars().count() as u16;
            let x = area
                .x
                .saturating_add(1)
                .saturating_add(width)
                .min(area.right().saturating_sub(2));
            frame.set_cursor(x, area.y.saturating_add(1));
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let color = if self.state.loading {
            self.theme.warning
        } else {
            self.theme.muted
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            self.state.status.clone(),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, label: &str, enabled: bool, danger: bool) {
        let color = match (enabled, danger) {
            (false, _) => self.theme.muted,
            (true, true) => self.theme.danger,
            (true, false) => self.theme.accent_alt,
        };
        let style = if enabled {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        let button = Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(button, area);
    }

    fn render_page_buttons(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        self.render_button(
            frame,
            halves[0],
            "Previous page",
            self.controller.has_previous(),
            false,
        );
        self.render_button(
            frame,
            halves[1],
            "Next page",
            self.controller.has_next(),
            false,
        );
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        self.state.results_area = area;
        let window = self.controller.page_window();
        let items: Vec<ListItem> = if !self.controller.search_active() {
            Vec::new()
        } else if window.is_empty() {
            vec![ListItem::new(Span::styled(
                NO_RESULTS,
                Style::default().fg(self.theme.muted),
            ))]
        } else {
            window
                .items
                .iter()
                .map(|game| ListItem::new(game.name.clone()))
                .collect()
        };

        let title = if self.controller.search_active() {
            format!("Assumed (page {})", self.controller.page_index() + 1)
        } else {
            "Assumed".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.focus_style(Focus::Results))
            .title(title)
            .title(
                Title::from(format!(
                    "min. {} symbols",
                    self.controller.settings().min_query_len
                ))
                .position(Position::Bottom)
                .alignment(Alignment::Right),
            );

        let mut list_state = ListState::default();
        if self.state.focus == Focus::Results && !window.is_empty() {
            list_state.select(Some(self.state.result_cursor.min(window.items.len() - 1)));
        }
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(self.theme.selection_bg)
                .fg(self.theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_favorite_buttons(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let label = self.controller.add_button_label(Instant::now()).to_string();
        self.render_button(frame, halves[0], &label, self.controller.add_enabled(), false);
        self.render_button(
            frame,
            halves[1],
            REMOVE_LABEL,
            self.controller.remove_enabled(),
            true,
        );
    }

    fn render_output(&self, frame: &mut Frame, area: Rect) {
        let text = self.controller.output().unwrap_or_default().to_string();
        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent))
                    .title("Output"),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_favorites(&self, frame: &mut Frame, area: Rect) {
        let favorites = self.controller.favorites();
        let items: Vec<ListItem> = favorites
            .iter()
            .map(|name| ListItem::new(name.clone()))
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.focus_style(Focus::Favorites))
            .title(format!("Favorites ({})", favorites.len()));

        let mut list_state = ListState::default();
        if self.state.focus == Focus::Favorites && !favorites.is_empty() {
            list_state.select(Some(self.state.favorite_cursor.min(favorites.len() - 1)));
        }
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(self.theme.selection_bg)
                .fg(self.theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = match self.state.focus {
            Focus::Query => "Type to search • Enter look up exact name • Tab switch panel • Esc quit",
            Focus::Results => {
                "↑↓ move • Enter players • n/p or ←→ page • a add favorite • Tab switch • q quit"
            }
            Focus::Favorites => "↑↓ move • Enter players • d delete favorite • Tab switch • q quit",
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            help,
            Style::default().fg(self.theme.muted),
        )));
        frame.render_widget(paragraph, area);
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

struct UiState {
    input: String,
    focus: Focus,
    result_cursor: usize,
    favorite_cursor: usize,
    results_area: Rect,
    status: String,
    loading: bool,
    should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input: String::new(),
            focus: Focus::Query,
            result_cursor: 0,
            favorite_cursor: 0,
            results_area: Rect::default(),
            status: "Ready".to_string(),
            loading: false,
            should_quit: false,
        }
    }
}

impl UiState {
    fn set_status(&mut self, message: String) {
        self.status = message;
    }

    fn move_results(&mut self, delta: isize, visible: usize) {
        self.result_cursor = step_cursor(self.result_cursor, delta, visible);
    }

    fn move_favorites(&mut self, delta: isize, total: usize) {
        self.favorite_cursor = step_cursor(self.favorite_cursor, delta, total);
    }

    fn clamp_results(&mut self, visible: usize) {
        self.result_cursor = self.result_cursor.min(visible.saturating_sub(1));
    }

    fn clamp_favorites(&mut self, total: usize) {
        self.favorite_cursor = self.favorite_cursor.min(total.saturating_sub(1));
    }
}

fn area_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

fn step_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = cursor as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_steps_stay_in_bounds() {
        assert_eq!(step_cursor(0, -1, 5), 0);
        assert_eq!(step_cursor(4, 1, 5), 4);
        assert_eq!(step_cursor(2, 1, 5), 3);
        assert_eq!(step_cursor(3, 1, 0), 0);
    }

    #[test]
    fn scroll_hit_test_uses_half_open_bounds() {
        let area = Rect::new(2, 3, 10, 4);
        assert!(area_contains(area, 2, 3));
        assert!(area_contains(area, 11, 6));
        assert!(!area_contains(area, 12, 6));
        assert!(!area_contains(area, 5, 7));
        assert!(!area_contains(Rect::default(), 0, 0));
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut focus = Focus::Query;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Query);
        assert_eq!(Focus::Query.previous(), Focus::Favorites);
        assert_eq!(Focus::Results.previous(), Focus::Query);
    }

    #[test]
    fn favorite_cursor_clamps_after_removal() {
        let mut state = UiState::default();
        state.move_favorites(1, 3);
        state.move_favorites(1, 3);
        assert_eq!(state.favorite_cursor, 2);
        state.clamp_favorites(2);
        assert_eq!(state.favorite_cursor, 1);
        state.clamp_favorites(0);
        assert_eq!(state.favorite_cursor, 0);
    }
}
