use crate::app::App;
use crate::slider::SwipeOutcome;
use ratatui::layout::{Position, Rect};
use tracing::debug;

impl App {
    /// Next button; does nothing while the control is disabled
    pub fn slider_next(&mut self) {
        if let Some(slider) = self.active_slider_mut()
            && slider.can_go_next()
        {
            slider.advance();
        }
    }

    /// Previous button; does nothing while the control is disabled
    pub fn slider_prev(&mut self) {
        if let Some(slider) = self.active_slider_mut()
            && slider.can_go_prev()
        {
            slider.retreat();
        }
    }

    /// Mouse button pressed at `column`, `row`. Presses outside the drawn
    /// slider start no gesture.
    pub fn slider_gesture_start(&mut self, column: u16, row: u16) {
        let x = self.column_to_px(column);
        let on_slider = self
            .slider_area
            .is_some_and(|area| area.contains(Position::new(column, row)));
        let Some(slider) = self.active_slider_mut() else {
            return;
        };
        if on_slider {
            slider.on_gesture_start(x);
        } else {
            slider.cancel_gesture();
        }
    }

    /// Records where the current page drew its slider, if it drew one
    pub fn set_slider_area(&mut self, area: Option<Rect>) {
        self.slider_area = area;
    }

    /// Mouse dragged to `column`
    pub fn slider_gesture_move(&mut self, column: u16) {
        let x = self.column_to_px(column);
        if let Some(slider) = self.active_slider_mut() {
            slider.on_gesture_move(x);
        }
    }

    /// Mouse button released
    pub fn slider_gesture_end(&mut self) -> SwipeOutcome {
        let Some(slider) = self.active_slider_mut() else {
            return SwipeOutcome::Ignored;
        };
        let outcome = slider.on_gesture_end();
        if outcome != SwipeOutcome::Ignored {
            debug!(?outcome, index = slider.index(), "slider swiped");
        }
        outcome
    }

    /// Drops a drag whose release will never arrive, e.g. after focus loss
    pub fn cancel_slider_gesture(&mut self) {
        if let Some(slider) = self.active_slider_mut()
            && slider.gesture_in_progress()
        {
            slider.cancel_gesture();
            debug!("slider gesture cancelled");
        }
    }

    fn column_to_px(&self, column: u16) -> i32 {
        i32::from(column) * i32::from(self.config.viewport.cell_width_px.max(1))
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, AppMode};
    use crate::config::Config;
    use crate::slider::SwipeOutcome;
    use ratatui::layout::Rect;
    use std::time::Instant;

    const SLIDER_ROW: u16 = 12;

    fn home_with_artists(count: usize, columns: u16) -> App {
        let mut config = Config::default();
        config.ui.preloader_ms = 0;
        let mut app = App::new(config);
        app.storage_error = Some("offline".to_string());
        app.start(Instant::now(), columns);
        app.artist_slider.on_items_change(count);
        app.set_slider_area(Some(Rect::new(0, 8, columns, 9)));
        app
    }

    #[test]
    fn test_buttons_respect_disabled_state() {
        // 200 columns at 8px is three per view
        let mut app = home_with_artists(5, 200);
        app.slider_prev();
        assert_eq!(app.artist_slider.index(), 0);

        app.slider_next();
        app.slider_next();
        assert_eq!(app.artist_slider.index(), 2);
        app.slider_next();
        assert_eq!(app.artist_slider.index(), 2);
        app.slider_prev();
        assert_eq!(app.artist_slider.index(), 1);
    }

    #[test]
    fn test_drag_in_columns_becomes_swipe() {
        let mut app = home_with_artists(10, 80);
        // 7 columns at 8px is 56px, over the threshold
        app.slider_gesture_start(40, SLIDER_ROW);
        app.slider_gesture_move(33);
        assert_eq!(app.slider_gesture_end(), SwipeOutcome::Advanced);
        assert_eq!(app.artist_slider.index(), 1);

        // 5 columns is 40px, under it
        app.slider_gesture_start(40, SLIDER_ROW);
        app.slider_gesture_move(45);
        assert_eq!(app.slider_gesture_end(), SwipeOutcome::Ignored);
        assert_eq!(app.artist_slider.index(), 1);
    }

    #[test]
    fn test_cancelled_drag_does_not_swipe() {
        let mut app = home_with_artists(10, 80);
        app.slider_gesture_start(60, SLIDER_ROW);
        app.slider_gesture_move(0);
        app.cancel_slider_gesture();
        assert_eq!(app.slider_gesture_end(), SwipeOutcome::Ignored);
        assert_eq!(app.artist_slider.index(), 0);
    }

    #[test]
    fn test_drag_starting_outside_slider_is_ignored() {
        let mut app = home_with_artists(10, 80);
        // Header row, then a drag of 10 columns (80px) across the slider
        app.slider_gesture_start(40, 1);
        app.slider_gesture_move(30);
        assert_eq!(app.slider_gesture_end(), SwipeOutcome::Ignored);
        assert_eq!(app.artist_slider.index(), 0);

        // Footer row, below the slider
        app.slider_gesture_start(40, 20);
        app.slider_gesture_move(30);
        assert_eq!(app.slider_gesture_end(), SwipeOutcome::Ignored);
        assert_eq!(app.artist_slider.index(), 0);
    }

    #[test]
    fn test_page_change_forgets_slider_area() {
        let mut app = home_with_artists(10, 80);
        app.navigate_to(AppMode::NovaEra, Instant::now());
        assert!(app.slider_area.is_none());
        app.album_slider.on_items_change(10);
        app.slider_gesture_start(40, SLIDER_ROW);
        app.slider_gesture_move(30);
        assert_eq!(app.slider_gesture_end(), SwipeOutcome::Ignored);
        assert_eq!(app.album_slider.index(), 0);
    }

    #[test]
    fn test_gestures_ignored_on_pages_without_slider() {
        let mut app = home_with_artists(10, 80);
        app.navigate_to(AppMode::Help, Instant::now());
        app.slider_gesture_start(60, SLIDER_ROW);
        app.slider_gesture_move(0);
        assert_eq!(app.slider_gesture_end(), SwipeOutcome::Ignored);
    }
}
