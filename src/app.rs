//! Application state management for the Pokédex TUI
//!
//! This module contains the main application state, handling keyboard input,
//! dispatching fetches to the aggregator and paginator, and state transitions
//! between the catalog list and the record detail view.

use crossterm::event::{KeyCode, KeyEvent};

use crate::aggregator::{Aggregator, FetchOutcome};
use crate::cli::{StartupConfig, StartupMode};
use crate::data::{CatalogClient, CatalogEntry, SpeciesRecord};
use crate::paginator::{PageOutcome, Paginator};
use crate::store::DexStore;

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while the first page is fetched
    Loading,
    /// List view showing the accumulated catalog
    CatalogList,
    /// Detail view for the record in the store
    RecordDetail,
}

/// Work the event loop has to await on the app's behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Fetch the full record for a species key
    FetchRecord(String),
    /// Append the next catalog page
    NextPage,
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Index of currently selected entry in the catalog list
    pub selected_index: usize,
    /// Index of the variant shown in the detail view
    pub variant_index: usize,
    /// Scroll offset for the detail view
    pub detail_scroll_offset: u16,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Message shown in the footer after a failed or empty fetch
    pub status_message: Option<String>,
    /// Species to open once the first page has loaded (from --show)
    pub pending_show: Option<String>,
    /// Catalog, current record and loading flag
    pub store: DexStore,
    /// Work requested by the last key press
    pending: Option<PendingAction>,
    aggregator: Aggregator,
    paginator: Paginator,
}

impl App {
    /// Creates a new App from the startup configuration
    pub fn new(config: &StartupConfig) -> Self {
        let client = CatalogClient::configured(&config.dex, config.use_cache);
        let mut app = Self::with_client(client, config);
        if let StartupMode::Show(species) = &config.mode {
            app.pending_show = Some(species.clone());
        }
        app
    }

    /// Creates a new App around an existing catalog client
    pub fn with_client(client: CatalogClient, config: &StartupConfig) -> Self {
        Self {
            state: AppState::Loading,
            selected_index: 0,
            variant_index: 0,
            detail_scroll_offset: 0,
            should_quit: false,
            show_help: false,
            status_message: None,
            pending_show: None,
            store: DexStore::new(),
            pending: None,
            aggregator: Aggregator::new(client.clone(), &config.dex),
            paginator: Paginator::new(client, &config.dex),
        }
    }

    /// Loads the first catalog page and opens the startup species, if any
    pub async fn load_initial(&mut self) {
        self.load_next_page().await;
        self.state = AppState::CatalogList;

        if let Some(species) = self.pending_show.take() {
            self.load_record(&species).await;
        }
    }

    /// Takes the action requested by the last key press, if any
    pub fn take_pending(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    /// Awaits a pending action
    pub async fn run_action(&mut self, action: PendingAction) {
        match action {
            PendingAction::FetchRecord(species) => self.load_record(&species).await,
            PendingAction::NextPage => self.load_next_page().await,
        }
    }

    /// Fetches a record and switches to the detail view
    pub async fn load_record(&mut self, species: &str) {
        let outcome = self
            .aggregator
            .fetch_full_record(&mut self.store, species)
            .await;

        self.status_message = match outcome {
            FetchOutcome::Found(_) => None,
            FetchOutcome::NotFound => Some(format!("No species called '{}'", species)),
            FetchOutcome::Failed(e) => Some(format!("Could not load '{}': {}", species, e)),
        };
        self.reset_detail_view_state();
        self.state = AppState::RecordDetail;
    }

    /// Appends the next catalog page
    pub async fn load_next_page(&mut self) {
        match self.paginator.fetch_next_page(&mut self.store).await {
            PageOutcome::Appended(_) => {
                self.status_message = None;
            }
            PageOutcome::Exhausted => {}
            PageOutcome::Failed(e) => {
                self.status_message = Some(format!("Could not load more species: {}", e));
            }
        }
    }

    /// Returns the number of species loaded so far
    pub fn catalog_len(&self) -> usize {
        self.store.catalog().len()
    }

    /// Returns the currently selected catalog entry, if any
    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.store.catalog().get(self.selected_index)
    }

    /// Number of species the catalog grows to
    pub fn catalog_size(&self) -> usize {
        self.paginator.catalog_size()
    }

    /// Whether the paginator would still fetch another page
    pub fn has_more(&self) -> bool {
        !self.paginator.is_exhausted(&self.store)
    }

    /// The record in the store, if the last fetch produced one
    pub fn record(&self) -> Option<&SpeciesRecord> {
        self.store.record()
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q`: Quit the application
    /// - `Up`/`k`, `Down`/`j`: Move selection or scroll
    /// - `g`/`G`: Jump to first/last loaded entry
    /// - `n`: Load the next catalog page
    /// - `Enter`: Open the selected species
    /// - `Left`/`h`, `Right`/`l`: Cycle variants in the detail view
    /// - `Esc`: Quit from the list, go back from the detail view
    /// - `?`: Toggle help
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::CatalogList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Char('g') => {
                    self.selected_index = 0;
                }
                KeyCode::Char('G') => {
                    self.selected_index = self.catalog_len().saturating_sub(1);
                }
                KeyCode::Char('n') => {
                    self.request_next_page();
                }
                KeyCode::Enter => {
                    if let Some(entry) = self.selected_entry() {
                        let key = entry
                            .species_id()
                            .map(|id| id.to_string())
                            .unwrap_or_else(|| entry.name.clone());
                        self.pending = Some(PendingAction::FetchRecord(key));
                    }
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::RecordDetail => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Backspace => {
                    self.reset_detail_view_state();
                    self.status_message = None;
                    self.state = AppState::CatalogList;
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.next_variant();
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    self.previous_variant();
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.scroll_down();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.scroll_up();
                }
                KeyCode::Char('g') => {
                    self.detail_scroll_offset = 0;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }

    /// Moves the selection up in the list, stopping at the top
    fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Moves the selection down; reaching the last entry asks for another page
    fn move_selection_down(&mut self) {
        let count = self.catalog_len();
        if count == 0 {
            return;
        }
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
        if self.selected_index + 1 == count {
            self.request_next_page();
        }
    }

    fn request_next_page(&mut self) {
        if self.has_more() && !self.store.is_loading() {
            self.pending = Some(PendingAction::NextPage);
        }
    }

    /// Number of variants in the current record
    fn variant_count(&self) -> usize {
        self.record().map(|r| r.data.len()).unwrap_or(0)
    }

    /// Shows the next variant, wrapping to the first
    fn next_variant(&mut self) {
        let count = self.variant_count();
        if count == 0 {
            return;
        }
        self.variant_index = (self.variant_index + 1) % count;
        self.detail_scroll_offset = 0;
    }

    /// Shows the previous variant, wrapping to the last
    fn previous_variant(&mut self) {
        let count = self.variant_count();
        if count == 0 {
            return;
        }
        self.variant_index = if self.variant_index == 0 {
            count - 1
        } else {
            self.variant_index - 1
        };
        self.detail_scroll_offset = 0;
    }

    /// Scrolls up in the detail view, stopping at 0
    pub fn scroll_up(&mut self) {
        self.detail_scroll_offset = self.detail_scroll_offset.saturating_sub(1);
    }

    /// Scrolls down in the detail view; the renderer clamps to content height
    pub fn scroll_down(&mut self) {
        const MAX_SCROLL: u16 = 200;
        if self.detail_scroll_offset < MAX_SCROLL {
            self.detail_scroll_offset += 1;
        }
    }

    /// Resets detail view state when a record is opened or left
    pub fn reset_detail_view_state(&mut self) {
        self.variant_index = 0;
        self.detail_scroll_offset = 0;
    }

    #[cfg(test)]
    pub(crate) fn with_catalog(names: &[&str]) -> Self {
        let config = StartupConfig::default();
        let mut app = Self::with_client(CatalogClient::without_cache(&config.dex), &config);
        app.store.append_catalog(names.iter().enumerate().map(|(i, name)| CatalogEntry {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", i + 1),
            image: format!("https://img.test/{}.png", i + 1),
        }));
        app.state = AppState::CatalogList;
        app
    }
}
