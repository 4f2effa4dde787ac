use crate::app::App;
use std::time::Instant;

impl App {
    pub fn close_help(&mut self, now: Instant) {
        self.go_back(now);
    }
}
