use crate::app::App;
use crate::catalog::LoadState;
use std::time::Instant;

impl App {
    pub(crate) fn load_events(&mut self) {
        self.events =
            LoadState::from_result(self.block_on_store(|store| store.all_events_with_artists()));
        if self.events_selected >= self.events.len() {
            self.events_selected = self.events.len().saturating_sub(1);
        }
    }

    /// Jumps from the highlighted event to its artist
    pub fn open_selected_event_artist(&mut self, now: Instant) {
        let artist_id = self
            .events
            .items()
            .get(self.events_selected)
            .and_then(|event| event.artist.as_ref())
            .map(|artist| artist.id.clone());

        match artist_id {
            Some(artist_id) => self.open_artist(&artist_id, now),
            None => self.show_status_toast("SEM ARTISTA"),
        }
    }
}
