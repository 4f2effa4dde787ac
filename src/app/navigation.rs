use crate::app::{App, AppMode};

/// Generic navigation trait for list-like pages
pub trait Navigable {
    /// Returns the total number of items in the list
    fn get_item_count(&self) -> usize;

    /// Returns the currently selected index
    fn get_selected_index(&self) -> usize;

    /// Sets the selected index
    fn set_selected_index(&mut self, index: usize);

    /// Moves to the next item (wraps around to start)
    fn next_item(&mut self) {
        let count = self.get_item_count();
        if count > 0 {
            let next = (self.get_selected_index() + 1) % count;
            self.set_selected_index(next);
        }
    }

    /// Moves to the previous item (wraps around to end)
    fn previous_item(&mut self) {
        let count = self.get_item_count();
        if count > 0 {
            let prev = if self.get_selected_index() == 0 {
                count - 1
            } else {
                self.get_selected_index() - 1
            };
            self.set_selected_index(prev);
        }
    }
}

// The roster and the events page are the two list pages
impl Navigable for App {
    fn get_item_count(&self) -> usize {
        match self.mode {
            AppMode::Artists => self.artists.len(),
            AppMode::Events => self.events.len(),
            AppMode::Preloader
            | AppMode::Home
            | AppMode::ArtistDetail
            | AppMode::NovaEra
            | AppMode::Help => 0,
        }
    }

    fn get_selected_index(&self) -> usize {
        match self.mode {
            AppMode::Events => self.events_selected,
            AppMode::Artists
            | AppMode::Preloader
            | AppMode::Home
            | AppMode::ArtistDetail
            | AppMode::NovaEra
            | AppMode::Help => self.artists_selected,
        }
    }

    fn set_selected_index(&mut self, index: usize) {
        match self.mode {
            AppMode::Artists => self.artists_selected = index,
            AppMode::Events => self.events_selected = index,
            AppMode::Preloader
            | AppMode::Home
            | AppMode::ArtistDetail
            | AppMode::NovaEra
            | AppMode::Help => {}
        }
    }
}
