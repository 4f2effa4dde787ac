use std::time::{Duration, Instant};

use crate::catalog::{Artist, Event, LoadState, Lp};

/// Entry in the header navigation
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub key: char,
    pub label: &'static str,
    pub mode: super::AppMode,
}

/// Everything the artist detail page shows
#[derive(Debug, Clone)]
pub struct ArtistDetailState {
    pub artist_id: String,
    /// Ready and empty when the roster has no artist with this id
    pub artist: LoadState<Artist>,
    pub events: LoadState<Event>,
    pub lps: LoadState<Lp>,
    pub scroll: u16,
}

impl ArtistDetailState {
    pub fn new(artist_id: impl Into<String>) -> Self {
        Self {
            artist_id: artist_id.into(),
            artist: LoadState::Loading,
            events: LoadState::Loading,
            lps: LoadState::Loading,
            scroll: 0,
        }
    }

    /// The artist, once the roster has loaded and contains it
    #[must_use]
    pub fn artist(&self) -> Option<&Artist> {
        self.artist.items().first()
    }
}

/// Startup curtain animation
#[derive(Debug, Clone)]
pub struct Preloader {
    pub started_at: Instant,
    pub duration: Duration,
}

impl Preloader {
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    /// Fraction of the animation elapsed, from 0.0 to 1.0
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[derive(Debug, Clone)]
pub struct StatusToast {
    pub message: String,
    pub created_at: Instant,
}

impl StatusToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, duration: Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preloader_progress() {
        let start = Instant::now();
        let preloader = Preloader::new(start, Duration::from_millis(3000));
        assert_eq!(preloader.progress(start), 0.0);
        assert!((preloader.progress(start + Duration::from_millis(1500)) - 0.5).abs() < 1e-9);
        assert!(!preloader.is_finished(start + Duration::from_millis(2999)));
        assert!(preloader.is_finished(start + Duration::from_millis(3000)));
        assert_eq!(preloader.progress(start + Duration::from_secs(60)), 1.0);
    }

    #[test]
    fn test_zero_length_preloader_is_finished() {
        let start = Instant::now();
        assert!(Preloader::new(start, Duration::ZERO).is_finished(start));
    }
}
