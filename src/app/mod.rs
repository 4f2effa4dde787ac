mod artist_detail;
mod artists;
mod events;
mod help;
mod navigation;
mod nova_era;
mod slider;
mod types;

pub use navigation::Navigable;
pub use types::*;

use crate::catalog::{Artist, Event, LoadState, Lp, SocialLinks};
use crate::config::Config;
use crate::slider::{SliderController, viewport};
use crate::storage::CatalogStore;
use color_eyre::{Result, eyre::eyre};
use ratatui::layout::Rect;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Page currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Preloader,
    Home,
    Artists,
    ArtistDetail,
    Events,
    NovaEra,
    Help,
}

/// Header navigation, in display order
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        key: '1',
        label: "Início",
        mode: AppMode::Home,
    },
    NavItem {
        key: '2',
        label: "Artistas",
        mode: AppMode::Artists,
    },
    NavItem {
        key: '3',
        label: "Eventos",
        mode: AppMode::Events,
    },
    NavItem {
        key: '4',
        label: "Nova Era",
        mode: AppMode::NovaEra,
    },
    NavItem {
        key: '?',
        label: "Ajuda",
        mode: AppMode::Help,
    },
];

/// A page visited earlier, restored by `go_back`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mode: AppMode,
    pub artist_id: Option<String>,
}

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub page_history: Vec<HistoryEntry>,
    pub should_quit: bool,
    pub config: Config,
    pub viewport_columns: u16,

    pub artists: LoadState<Artist>,
    pub artists_selected: usize,
    pub events: LoadState<Event>,
    pub events_selected: usize,
    pub nova_era_lps: LoadState<Lp>,
    pub social_links: SocialLinks,
    pub detail: Option<ArtistDetailState>,

    pub artist_slider: SliderController,
    pub album_slider: SliderController,
    /// Screen area of the slider drawn last frame; mouse drags start only inside it
    pub slider_area: Option<Rect>,
    pub preloader: Option<Preloader>,

    pub storage: Option<CatalogStore>,
    pub storage_runtime: Option<tokio::runtime::Runtime>,
    pub storage_error: Option<String>,
    pub status_toast: Option<StatusToast>,
}

impl App {
    /// Creates the application; nothing is loaded until [`App::start`]
    pub fn new(config: Config) -> Self {
        let threshold = config.slider.swipe_threshold_px;
        let artist_slider =
            SliderController::new(config.slider.artist_interval()).with_swipe_threshold(threshold);
        let album_slider =
            SliderController::new(config.slider.album_interval()).with_swipe_threshold(threshold);

        Self {
            mode: AppMode::Preloader,
            page_history: Vec::new(),
            should_quit: false,
            config,
            viewport_columns: 0,
            artists: LoadState::Loading,
            artists_selected: 0,
            events: LoadState::Loading,
            events_selected: 0,
            nova_era_lps: LoadState::Loading,
            social_links: SocialLinks::default(),
            detail: None,
            artist_slider,
            album_slider,
            slider_area: None,
            preloader: None,
            storage: None,
            storage_runtime: None,
            storage_error: None,
            status_toast: None,
        }
    }

    /// Opens the catalog store; a failure is kept and shown by every page
    pub fn init_services(&mut self) {
        if let Err(error) = self.ensure_storage() {
            error!(%error, "catalog store unavailable");
            self.storage_error = Some(error.to_string());
        }
    }

    /// Shows the preloader, then the home page
    pub fn start(&mut self, now: Instant, columns: u16) {
        self.on_resize(columns);
        let duration = self.config.ui.preloader_duration();
        if duration.is_zero() {
            self.finish_preloader(now);
            return;
        }
        self.mode = AppMode::Preloader;
        self.preloader = Some(Preloader::new(now, duration));
    }

    pub fn finish_preloader(&mut self, now: Instant) {
        self.preloader = None;
        if self.mode == AppMode::Preloader || self.mode == AppMode::Home {
            self.mode = AppMode::Home;
            self.enter_page(now);
        }
    }

    /// Drives time-based state from the event loop
    pub fn tick(&mut self, now: Instant) {
        if self.mode == AppMode::Preloader
            && self
                .preloader
                .as_ref()
                .is_none_or(|preloader| preloader.is_finished(now))
        {
            self.finish_preloader(now);
        }

        if let Some(slider) = self.active_slider_mut()
            && slider.poll_timer(now)
        {
            debug!(index = slider.index(), "slider auto-advanced");
        }

        self.clear_expired_status_toast();
    }

    /// Applies a terminal width, in columns, to both sliders
    pub fn on_resize(&mut self, columns: u16) {
        self.viewport_columns = columns;
        let per_view =
            viewport::items_per_view_for_columns(columns, self.config.viewport.cell_width_px);
        self.artist_slider.on_viewport_change(per_view);
        self.album_slider.on_viewport_change(per_view);
    }

    /// Switches page, remembering the current one for `go_back`
    pub fn navigate_to(&mut self, mode: AppMode, now: Instant) {
        if mode == self.mode || mode == AppMode::Preloader || mode == AppMode::ArtistDetail {
            return;
        }
        self.push_history();
        self.switch_page(mode, now);
    }

    /// Opens the detail page of one artist
    pub fn open_artist(&mut self, artist_id: &str, now: Instant) {
        if self.mode == AppMode::ArtistDetail
            && self
                .detail
                .as_ref()
                .is_some_and(|detail| detail.artist_id == artist_id)
        {
            return;
        }
        self.push_history();
        self.detail = Some(ArtistDetailState::new(artist_id));
        self.switch_page(AppMode::ArtistDetail, now);
    }

    /// Returns to the previous page, or home when there is none
    pub fn go_back(&mut self, now: Instant) {
        match self.page_history.pop() {
            Some(entry) => {
                if let Some(artist_id) = entry.artist_id {
                    self.detail = Some(ArtistDetailState::new(artist_id));
                }
                self.switch_page(entry.mode, now);
            }
            None if self.mode != AppMode::Home => self.switch_page(AppMode::Home, now),
            None => {}
        }
    }

    fn push_history(&mut self) {
        if self.mode == AppMode::Preloader {
            return;
        }
        let artist_id = match self.mode {
            AppMode::ArtistDetail => self.detail.as_ref().map(|detail| detail.artist_id.clone()),
            AppMode::Preloader
            | AppMode::Home
            | AppMode::Artists
            | AppMode::Events
            | AppMode::NovaEra
            | AppMode::Help => None,
        };
        self.page_history.push(HistoryEntry {
            mode: self.mode,
            artist_id,
        });
    }

    fn switch_page(&mut self, mode: AppMode, now: Instant) {
        self.leave_page();
        self.mode = mode;
        self.enter_page(now);
    }

    /// Releases page-scoped resources (slider timers and gestures)
    fn leave_page(&mut self) {
        self.slider_area = None;
        if let Some(slider) = self.active_slider_mut()
            && slider.is_started()
        {
            slider.stop();
            debug!("slider stopped");
        }
    }

    /// Fetches the page's data and starts its slider
    fn enter_page(&mut self, now: Instant) {
        info!(page = ?self.mode, "entering page");
        match self.mode {
            AppMode::Home => self.load_home(now),
            AppMode::Artists => self.load_artists(),
            AppMode::ArtistDetail => self.load_artist_detail(now),
            AppMode::Events => self.load_events(),
            AppMode::NovaEra => self.load_nova_era(now),
            AppMode::Preloader | AppMode::Help => {}
        }
    }

    fn load_home(&mut self, now: Instant) {
        self.load_artists();
        self.social_links = self.load_social_links();
        let count = self.artists.len();
        self.artist_slider.on_items_change(count);
        self.artist_slider.start(now);
    }

    fn load_social_links(&self) -> SocialLinks {
        match (&self.storage, &self.storage_runtime) {
            (Some(store), Some(runtime)) => runtime.block_on(store.social_links()),
            _ => SocialLinks::default(),
        }
    }

    /// Runs one store read to completion on the storage runtime
    pub(crate) fn block_on_store<'a, T, F, Fut>(&'a self, fetch: F) -> Result<T>
    where
        F: FnOnce(&'a CatalogStore) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let (Some(store), Some(runtime)) = (&self.storage, &self.storage_runtime) else {
            let message = self
                .storage_error
                .clone()
                .unwrap_or_else(|| "Catalog store unavailable".to_string());
            return Err(eyre!(message));
        };
        runtime.block_on(fetch(store))
    }

    pub(crate) fn ensure_storage_runtime(&mut self) -> Result<()> {
        if self.storage_runtime.is_none() {
            self.storage_runtime = Some(tokio::runtime::Runtime::new()?);
        }
        Ok(())
    }

    pub(crate) fn ensure_storage(&mut self) -> Result<()> {
        if self.storage.is_some() {
            return Ok(());
        }
        self.ensure_storage_runtime()?;
        let data_dir = self.config.data_dir()?;
        let runtime = self
            .storage_runtime
            .as_ref()
            .ok_or_else(|| eyre!("Storage runtime not initialized"))?;
        let store = runtime.block_on(CatalogStore::open(&data_dir, &self.config.storage))?;
        self.storage = Some(store);
        self.storage_error = None;
        Ok(())
    }

    /// Slider owned by the current page, if it has one
    #[must_use]
    pub fn active_slider(&self) -> Option<&SliderController> {
        match self.mode {
            AppMode::Home => Some(&self.artist_slider),
            AppMode::ArtistDetail | AppMode::NovaEra => Some(&self.album_slider),
            AppMode::Preloader | AppMode::Artists | AppMode::Events | AppMode::Help => None,
        }
    }

    pub fn active_slider_mut(&mut self) -> Option<&mut SliderController> {
        match self.mode {
            AppMode::Home => Some(&mut self.artist_slider),
            AppMode::ArtistDetail | AppMode::NovaEra => Some(&mut self.album_slider),
            AppMode::Preloader | AppMode::Artists | AppMode::Events | AppMode::Help => None,
        }
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        let should_clear = self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(Duration::from_secs(3)));
        if should_clear {
            self.status_toast = None;
        }
    }

    #[must_use]
    pub fn status_toast_message(&self) -> Option<&str> {
        self.status_toast.as_ref().map(|toast| toast.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// App with no store: every load fails with the same message
    fn offline_app() -> App {
        let mut config = Config::default();
        config.ui.preloader_ms = 0;
        let mut app = App::new(config);
        app.storage_error = Some("store offline".to_string());
        app
    }

    #[test]
    fn test_zero_preloader_goes_straight_home() {
        let mut app = offline_app();
        app.start(Instant::now(), 120);
        assert_eq!(app.mode, AppMode::Home);
        assert!(app.preloader.is_none());
        assert_eq!(app.artists.error(), Some("store offline"));
        assert!(app.artist_slider.is_started());
        assert!(app.artist_slider.is_idle());
    }

    #[test]
    fn test_preloader_finishes_on_tick() {
        let mut app = offline_app();
        app.config.ui.preloader_ms = 3000;
        let start = Instant::now();
        app.start(start, 80);
        assert_eq!(app.mode, AppMode::Preloader);

        app.tick(start + Duration::from_millis(1000));
        assert_eq!(app.mode, AppMode::Preloader);
        app.tick(start + Duration::from_millis(3000));
        assert_eq!(app.mode, AppMode::Home);
        assert!(app.page_history.is_empty());
    }

    #[test]
    fn test_navigation_history() {
        let mut app = offline_app();
        let now = Instant::now();
        app.start(now, 120);

        app.navigate_to(AppMode::Artists, now);
        app.open_artist("ana", now);
        app.navigate_to(AppMode::Events, now);
        assert_eq!(app.mode, AppMode::Events);
        assert_eq!(app.page_history.len(), 3);

        app.go_back(now);
        assert_eq!(app.mode, AppMode::ArtistDetail);
        assert_eq!(
            app.detail.as_ref().map(|detail| detail.artist_id.as_str()),
            Some("ana")
        );
        app.go_back(now);
        assert_eq!(app.mode, AppMode::Artists);
        app.go_back(now);
        assert_eq!(app.mode, AppMode::Home);
        app.go_back(now);
        assert_eq!(app.mode, AppMode::Home);
    }

    #[test]
    fn test_navigating_to_current_page_is_ignored() {
        let mut app = offline_app();
        let now = Instant::now();
        app.start(now, 120);
        app.navigate_to(AppMode::Home, now);
        assert!(app.page_history.is_empty());
    }

    #[test]
    fn test_leaving_page_stops_slider() {
        let mut app = offline_app();
        let now = Instant::now();
        app.start(now, 120);
        assert!(app.artist_slider.is_started());

        app.navigate_to(AppMode::Events, now);
        assert!(!app.artist_slider.is_started());
        assert!(app.active_slider().is_none());

        app.go_back(now);
        assert!(app.artist_slider.is_started());
    }

    #[test]
    fn test_resize_reclassifies_viewport() {
        let mut app = offline_app();
        app.on_resize(80);
        assert_eq!(app.artist_slider.per_view(), 1);
        app.on_resize(110);
        assert_eq!(app.album_slider.per_view(), 2);
        app.on_resize(200);
        assert_eq!(app.artist_slider.per_view(), 3);
    }
}
