use crate::app::App;
use crate::catalog::LoadState;
use std::time::Instant;

impl App {
    /// Fetches the roster with category names resolved
    pub(crate) fn load_artists(&mut self) {
        self.artists = LoadState::from_result(
            self.block_on_store(|store| store.artists_with_categories()),
        );
        if self.artists_selected >= self.artists.len() {
            self.artists_selected = self.artists.len().saturating_sub(1);
        }
    }

    /// Opens the artist highlighted in the roster list
    pub fn open_selected_artist(&mut self, now: Instant) {
        let Some(artist_id) = self
            .artists
            .items()
            .get(self.artists_selected)
            .map(|artist| artist.id.clone())
        else {
            return;
        };
        self.open_artist(&artist_id, now);
    }

    /// Opens the first artist in view on the home slider
    pub fn open_slider_artist(&mut self, now: Instant) {
        let Some(artist_id) = self
            .artists
            .items()
            .get(self.artist_slider.index())
            .map(|artist| artist.id.clone())
        else {
            return;
        };
        self.open_artist(&artist_id, now);
    }
}
