//! Application state management for staffdir.
//!
//! `App` owns the single directory store and wires it to the card gallery,
//! search bar and detail overlay. The one network fetch runs on a background
//! task and is applied on the UI thread when it arrives.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use staffdir_core::{
    ApiClient, ApiError, CardGallery, Config, DetailOverlay, Direction, DirectoryStore,
    LoadStatus, PeopleSource, SearchBar,
};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background load channel. Only one load is ever in flight.
const CHANNEL_BUFFER_SIZE: usize = 1;

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Searching,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub config: Config,
    api: ApiClient,

    pub store: DirectoryStore,
    pub gallery: CardGallery,
    pub search: SearchBar,
    pub overlay: DetailOverlay,

    pub state: AppState,
    pub load_status: Option<LoadStatus>,
    loading: bool,

    load_rx: mpsc::Receiver<Result<String, ApiError>>,
    load_tx: mpsc::Sender<Result<String, ApiError>>,
}

impl App {
    /// Create a new application instance. No network traffic happens here.
    pub fn new(config: Config) -> Result<Self> {
        let endpoint = config.endpoint_url();
        debug!(%endpoint, "Creating API client");
        let api = ApiClient::new(endpoint)?;

        let (load_tx, load_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Ok(Self {
            config,
            api,
            store: DirectoryStore::new(),
            gallery: CardGallery::new(),
            search: SearchBar::new(),
            overlay: DetailOverlay::new(),
            state: AppState::Normal,
            load_status: None,
            loading: false,
            load_rx,
            load_tx,
        })
    }

    // =========================================================================
    // Background Load
    // =========================================================================

    /// Spawn the directory fetch. Ignored while a fetch is already running.
    pub fn start_load(&mut self) {
        if self.loading {
            debug!("Load already in flight, ignoring");
            return;
        }
        info!(endpoint = %self.api.endpoint(), "Starting directory load");
        self.loading = true;

        let api = self.api.clone();
        let tx = self.load_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_body().await;
            if let Err(e) = tx.send(result).await {
                error!(error = %e, "Failed to send load result - channel closed");
            }
        });
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Apply a finished fetch, if one has arrived
    pub fn check_background_tasks(&mut self) {
        while let Ok(result) = self.load_rx.try_recv() {
            self.finish_load(result);
        }
    }

    fn finish_load(&mut self, result: Result<String, ApiError>) {
        self.loading = false;
        let status = self.store.complete_load(result, &mut self.gallery);
        self.load_status = Some(status);
        // Re-apply a query typed while the fetch was in flight
        if matches!(status, LoadStatus::Loaded(_)) && !self.search.value().is_empty() {
            self.search.on_change(&mut self.store, &mut self.gallery);
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub fn start_search(&mut self) {
        self.state = AppState::Searching;
    }

    pub fn stop_search(&mut self) {
        self.state = AppState::Normal;
    }

    pub fn search_insert(&mut self, c: char) {
        self.search.insert(c, &mut self.store, &mut self.gallery);
    }

    pub fn search_backspace(&mut self) {
        self.search.backspace(&mut self.store, &mut self.gallery);
    }

    pub fn search_clear(&mut self) {
        self.search.clear(&mut self.store, &mut self.gallery);
    }

    // =========================================================================
    // Overlay
    // =========================================================================

    /// Open the overlay on the focused card, scoped to the filtered view
    pub fn open_selected(&mut self) {
        if let Some(card) = self.gallery.selected_card() {
            let id = card.id;
            self.overlay.open(id, self.store.filtered());
        }
    }

    /// Focus the card at `index` and open it
    pub fn open_card(&mut self, index: usize) {
        if index < self.gallery.len() {
            self.gallery.select(index);
            self.open_selected();
        }
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.overlay.navigate(direction);
    }

    pub fn close_overlay(&mut self) {
        self.overlay.close();
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// Left-hand status bar text
    pub fn status_text(&self) -> String {
        match self.load_status {
            None => "Loading directory...".to_string(),
            Some(LoadStatus::Failed) => "No employees loaded (see log)".to_string(),
            Some(LoadStatus::Loaded(_)) => format!(
                "Showing {} of {} employees",
                self.store.filtered().len(),
                self.store.all().len()
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
