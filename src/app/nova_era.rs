use crate::app::App;
use crate::catalog::{LoadState, Lp};
use std::time::Instant;

/// Keeps only the LPs released under the Nova Era label
pub fn nova_era_releases(lps: Vec<Lp>) -> Vec<Lp> {
    lps.into_iter().filter(|lp| lp.nova_era).collect()
}

impl App {
    pub(crate) fn load_nova_era(&mut self, now: Instant) {
        self.nova_era_lps = LoadState::from_result(
            self.block_on_store(|store| store.all_lps())
                .map(nova_era_releases),
        );
        let count = self.nova_era_lps.len();
        self.album_slider.on_items_change(count);
        self.album_slider.start(now);
    }
}
