use crate::app::App;
use crate::catalog::LoadState;
use std::time::Instant;

impl App {
    /// Loads the artist, their events and their LPs, then starts the LP slider
    pub(crate) fn load_artist_detail(&mut self, now: Instant) {
        let Some(artist_id) = self.detail.as_ref().map(|detail| detail.artist_id.clone()) else {
            return;
        };
        let id = artist_id.as_str();

        let artist = match self.block_on_store(|store| store.artists_with_categories()) {
            Ok(artists) => LoadState::Ready(
                artists
                    .into_iter()
                    .filter(|artist| artist.id == id)
                    .take(1)
                    .collect(),
            ),
            Err(error) => LoadState::Failed(error.to_string()),
        };
        let events = LoadState::from_result(self.block_on_store(move |store| store.events_for_artist(id)));
        let lps = LoadState::from_result(self.block_on_store(move |store| store.lps_for_artist(id)));

        let lp_count = lps.len();
        if let Some(detail) = &mut self.detail {
            detail.artist = artist;
            detail.events = events;
            detail.lps = lps;
            detail.scroll = 0;
        }
        self.album_slider.on_items_change(lp_count);
        self.album_slider.start(now);
    }

    pub fn scroll_detail_down(&mut self, lines: u16) {
        if let Some(detail) = &mut self.detail {
            detail.scroll = detail.scroll.saturating_add(lines);
        }
    }

    pub fn scroll_detail_up(&mut self, lines: u16) {
        if let Some(detail) = &mut self.detail {
            detail.scroll = detail.scroll.saturating_sub(lines);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use crate::app::{App, AppMode};
    use crate::config::Config;
    use std::time::Instant;

    #[test]
    fn test_offline_detail_reports_error_everywhere() {
        let mut app = App::new(Config::default());
        app.storage_error = Some("database locked".to_string());
        let now = Instant::now();
        app.open_artist("ana", now);

        assert_eq!(app.mode, AppMode::ArtistDetail);
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.artist.error(), Some("database locked"));
        assert_eq!(detail.events.error(), Some("database locked"));
        assert_eq!(detail.lps.error(), Some("database locked"));
        assert!(detail.artist().is_none());
        assert!(app.album_slider.is_idle());
    }

    #[test]
    fn test_detail_scroll_saturates() {
        let mut app = App::new(Config::default());
        app.storage_error = Some("offline".to_string());
        app.open_artist("ana", Instant::now());
        app.scroll_detail_up(3);
        assert_eq!(app.detail.as_ref().unwrap().scroll, 0);
        app.scroll_detail_down(5);
        app.scroll_detail_up(2);
        assert_eq!(app.detail.as_ref().unwrap().scroll, 3);
    }
}
