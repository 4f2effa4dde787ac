mod artist_detail;
mod artists;
mod components;
mod events;
mod help;
mod home;
mod nova_era;
mod preloader;
mod slider;
mod utils;

use crate::app::{App, AppMode};
use ratatui::{Frame, layout::Rect};

/// Draws the current page. Returns the screen area of the slider it drew, if any.
pub fn render(f: &mut Frame, app: &App) -> Option<Rect> {
    match app.mode {
        AppMode::Home => home::render_home_view(f, app),
        AppMode::ArtistDetail => artist_detail::render_artist_detail_view(f, app),
        AppMode::NovaEra => nova_era::render_nova_era_view(f, app),
        AppMode::Preloader => {
            preloader::render_preloader(f, app);
            None
        }
        AppMode::Artists => {
            artists::render_artists_view(f, app);
            None
        }
        AppMode::Events => {
            events::render_events_view(f, app);
            None
        }
        AppMode::Help => {
            help::render_help_view(f, app);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::{Artist, LoadState};
    use crate::config::Config;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, width: u16, height: u16) -> Option<Rect> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut slider_area = None;
        terminal
            .draw(|f| slider_area = render(f, app))
            .unwrap();
        slider_area
    }

    #[test]
    fn test_home_reports_slider_between_hero_and_footer() {
        let mut app = App::new(Config::default());
        app.mode = AppMode::Home;
        app.artists = LoadState::Ready(vec![Artist {
            id: "ana".to_string(),
            name: "Ana Lua".to_string(),
            ..Artist::default()
        }]);

        let area = draw(&app, 100, 30).unwrap();
        // Header (3 rows) and hero (5 rows) sit above the slider
        assert!(area.y >= 8);
        // Social links and footer (3 rows each) sit below it
        assert!(area.bottom() <= 24);
        assert!(area.height >= 8);
        assert_eq!(area.width, 100);
    }

    #[test]
    fn test_no_slider_area_without_items() {
        let mut app = App::new(Config::default());
        app.mode = AppMode::Home;
        app.artists = LoadState::Ready(Vec::new());
        assert!(draw(&app, 100, 30).is_none());

        app.mode = AppMode::Events;
        assert!(draw(&app, 100, 30).is_none());
    }
}
