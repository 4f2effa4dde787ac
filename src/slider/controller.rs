use std::ops::Range;
use std::time::{Duration, Instant};

/// Minimum horizontal travel, in pixels, for a drag to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD_PX: u32 = 50;

/// Horizontal drag in progress over a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gesture {
    start_x: i32,
    end_x: Option<i32>,
}

/// Result of finishing a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Advanced,
    Retreated,
    Ignored,
}

/// Windowed carousel over an ordered list of `item_count` items.
///
/// The controller never sees the items themselves, only how many there are.
/// `index` is the first visible item and always stays in `0..=max_index()`.
/// Forward movement wraps back to the start; backward movement stops at 0.
#[derive(Debug, Clone)]
pub struct SliderController {
    index: usize,
    item_count: usize,
    per_view: usize,
    swipe_threshold_px: u32,
    gesture: Option<Gesture>,
    interval: Duration,
    active: bool,
    last_tick: Option<Instant>,
}

impl SliderController {
    /// Creates an idle controller that auto-advances every `interval` once started
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            index: 0,
            item_count: 0,
            per_view: 1,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            gesture: None,
            interval,
            active: false,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold_px: u32) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn per_view(&self) -> usize {
        self.per_view
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Largest legal index for the current item count and window size
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.per_view)
    }

    /// True when there is nothing to show
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.item_count == 0
    }

    /// True when the list is longer than the window
    #[must_use]
    pub fn can_scroll(&self) -> bool {
        self.item_count > self.per_view
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.can_scroll() && self.index < self.max_index()
    }

    /// Indices of the items currently in view
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let end = self.index.saturating_add(self.per_view).min(self.item_count);
        self.index.min(end)..end
    }

    /// Translation of the track, as a percentage of the viewport width
    #[must_use]
    pub fn visual_offset_percent(&self) -> f64 {
        (self.index * 100) as f64 / self.per_view as f64
    }

    /// Moves one item forward, wrapping to the start past the last window
    pub fn advance(&mut self) {
        if self.index >= self.max_index() {
            self.index = 0;
        } else {
            self.index += 1;
        }
    }

    /// Moves one item back, stopping at the start
    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Timer-driven advance
    pub fn tick(&mut self) {
        self.advance();
    }

    /// Applies a new window size and clamps the index into range
    pub fn on_viewport_change(&mut self, per_view: usize) {
        let per_view = per_view.max(1);
        if per_view == self.per_view {
            return;
        }
        self.per_view = per_view;
        self.index = self.index.min(self.max_index());
        self.restart_timer();
    }

    /// Replaces the item list; the window always returns to the start
    pub fn on_items_change(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.index = 0;
        self.gesture = None;
        self.restart_timer();
    }

    pub fn on_gesture_start(&mut self, x: i32) {
        self.gesture = Some(Gesture {
            start_x: x,
            end_x: None,
        });
    }

    pub fn on_gesture_move(&mut self, x: i32) {
        if let Some(gesture) = &mut self.gesture {
            gesture.end_x = Some(x);
        }
    }

    /// Evaluates the finished drag. A drag that never moved is not a swipe.
    pub fn on_gesture_end(&mut self) -> SwipeOutcome {
        let Some(gesture) = self.gesture.take() else {
            return SwipeOutcome::Ignored;
        };
        let Some(end_x) = gesture.end_x else {
            return SwipeOutcome::Ignored;
        };

        let distance = i64::from(gesture.start_x) - i64::from(end_x);
        if distance.unsigned_abs() < u64::from(self.swipe_threshold_px) {
            return SwipeOutcome::Ignored;
        }
        if distance > 0 {
            self.advance();
            SwipeOutcome::Advanced
        } else {
            self.retreat();
            SwipeOutcome::Retreated
        }
    }

    /// Drops a drag without evaluating it
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    #[must_use]
    pub fn gesture_in_progress(&self) -> bool {
        self.gesture.is_some()
    }

    /// Acquires the auto-advance timer. Pair with [`SliderController::stop`].
    pub fn start(&mut self, now: Instant) {
        self.active = true;
        self.last_tick = self.can_scroll().then_some(now);
    }

    /// Releases the auto-advance timer
    pub fn stop(&mut self) {
        self.active = false;
        self.last_tick = None;
        self.gesture = None;
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.active
    }

    /// True while a timer period is being counted
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Drives the timer from the event loop. Returns true when a tick fired.
    ///
    /// After the timer was cancelled by a change to the list or the window,
    /// the first poll only re-arms it, so a full period elapses before the
    /// next tick.
    pub fn poll_timer(&mut self, now: Instant) -> bool {
        if !self.active || !self.can_scroll() {
            self.last_tick = None;
            return false;
        }

        match self.last_tick {
            None => {
                self.last_tick = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.tick();
                self.last_tick = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    fn restart_timer(&mut self) {
        self.last_tick = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(item_count: usize, per_view: usize) -> SliderController {
        let mut slider = SliderController::new(Duration::from_millis(2000));
        slider.on_viewport_change(per_view);
        slider.on_items_change(item_count);
        slider
    }

    #[test]
    fn test_short_list_never_moves() {
        for per_view in 1..=3 {
            for item_count in 0..=per_view {
                let mut slider = slider(item_count, per_view);
                assert_eq!(slider.max_index(), 0);
                for _ in 0..5 {
                    slider.advance();
                    slider.tick();
                    assert_eq!(slider.index(), 0);
                }
                assert!(!slider.can_go_next());
                assert!(!slider.can_go_prev());
            }
        }
    }

    #[test]
    fn test_advance_wraps_after_max_index_plus_one() {
        for per_view in 1..=3 {
            for item_count in (per_view + 1)..12 {
                let mut slider = slider(item_count, per_view);
                for _ in 0..=slider.max_index() {
                    slider.advance();
                }
                assert_eq!(slider.index(), 0, "n={item_count} v={per_view}");
            }
        }
    }

    #[test]
    fn test_ten_items_three_per_view_sequence() {
        let mut slider = slider(10, 3);
        assert_eq!(slider.max_index(), 7);

        let mut seen = Vec::new();
        for _ in 0..8 {
            slider.advance();
            seen.push(slider.index());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 0]);
    }

    #[test]
    fn test_retreat_stops_at_zero() {
        let mut slider = slider(10, 3);
        slider.retreat();
        assert_eq!(slider.index(), 0);

        slider.advance();
        slider.advance();
        slider.retreat();
        assert_eq!(slider.index(), 1);
        slider.retreat();
        slider.retreat();
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn test_viewport_change_keeps_index_in_range() {
        let mut slider = slider(10, 3);
        for per_view in [1, 3, 2, 5, 1, 10, 12, 3, 0] {
            for _ in 0..4 {
                slider.advance();
            }
            slider.on_viewport_change(per_view);
            assert!(slider.index() <= slider.max_index());
            assert!(slider.per_view() >= 1);
        }
    }

    #[test]
    fn test_viewport_shrink_and_grow() {
        let mut slider = slider(10, 3);
        for _ in 0..6 {
            slider.advance();
        }
        assert_eq!(slider.index(), 6);

        slider.on_viewport_change(1);
        assert_eq!(slider.max_index(), 9);
        assert_eq!(slider.index(), 6);

        slider.on_viewport_change(3);
        assert_eq!(slider.index(), 6);
        slider.on_viewport_change(5);
        assert_eq!(slider.max_index(), 5);
        assert_eq!(slider.index(), 5);
    }

    #[test]
    fn test_items_change_resets_index() {
        let mut slider = slider(10, 2);
        slider.advance();
        slider.advance();
        slider.on_items_change(10);
        assert_eq!(slider.index(), 0);
        slider.advance();
        slider.on_items_change(0);
        assert_eq!(slider.index(), 0);
        assert!(slider.is_idle());
    }

    #[test]
    fn test_visual_offset_is_exact() {
        for per_view in 1..=3 {
            let mut slider = slider(9, per_view);
            for index in 0..=slider.max_index() {
                let expected = (index * 100) as f64 / per_view as f64;
                assert_eq!(slider.visual_offset_percent(), expected);
                slider.advance();
            }
        }
        let mut slider = slider(9, 2);
        slider.advance();
        assert_eq!(slider.visual_offset_percent(), 50.0);
    }

    #[test]
    fn test_leftward_swipe_advances_once() {
        let mut slider = slider(10, 3);
        slider.on_gesture_start(300);
        slider.on_gesture_move(250);
        slider.on_gesture_move(200);
        assert_eq!(slider.on_gesture_end(), SwipeOutcome::Advanced);
        assert_eq!(slider.index(), 1);
        assert!(!slider.gesture_in_progress());
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut slider = slider(10, 3);
        slider.on_gesture_start(300);
        slider.on_gesture_move(280);
        assert_eq!(slider.on_gesture_end(), SwipeOutcome::Ignored);
        assert_eq!(slider.index(), 0);
        assert!(!slider.gesture_in_progress());
    }

    #[test]
    fn test_rightward_swipe_retreats() {
        let mut slider = slider(10, 3);
        slider.advance();
        slider.advance();
        slider.on_gesture_start(100);
        slider.on_gesture_move(150);
        assert_eq!(slider.on_gesture_end(), SwipeOutcome::Retreated);
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn test_swipe_at_exact_threshold_counts() {
        let mut slider = slider(10, 3);
        slider.on_gesture_start(300);
        slider.on_gesture_move(250);
        assert_eq!(slider.on_gesture_end(), SwipeOutcome::Advanced);
    }

    #[test]
    fn test_gesture_without_movement_is_ignored() {
        let mut slider = slider(10, 3);
        slider.on_gesture_start(300);
        assert_eq!(slider.on_gesture_end(), SwipeOutcome::Ignored);
        assert_eq!(slider.on_gesture_end(), SwipeOutcome::Ignored);

        slider.on_gesture_move(0);
        assert_eq!(slider.on_gesture_end(), SwipeOutcome::Ignored);
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn test_custom_swipe_threshold() {
        let mut slider = slider(10, 3).with_swipe_threshold(8);
        slider.on_gesture_start(40);
        slider.on_gesture_move(32);
        assert_eq!(slider.on_gesture_end(), SwipeOutcome::Advanced);
    }

    #[test]
    fn test_timer_ticks_after_interval() {
        let base = Instant::now();
        let mut slider = slider(5, 2);
        slider.start(base);
        assert!(slider.timer_running());

        assert!(!slider.poll_timer(base + Duration::from_millis(1999)));
        assert!(slider.poll_timer(base + Duration::from_millis(2000)));
        assert_eq!(slider.index(), 1);
        assert!(!slider.poll_timer(base + Duration::from_millis(3000)));
        assert!(slider.poll_timer(base + Duration::from_millis(4000)));
        assert_eq!(slider.index(), 2);
    }

    #[test]
    fn test_timer_suppressed_when_nothing_to_scroll() {
        let base = Instant::now();
        let mut slider = slider(3, 3);
        slider.start(base);
        assert!(!slider.timer_running());
        assert!(!slider.poll_timer(base + Duration::from_secs(60)));
        assert_eq!(slider.index(), 0);

        let mut empty = SliderController::new(Duration::from_millis(10));
        empty.start(base);
        assert!(!empty.poll_timer(base + Duration::from_secs(1)));
        assert!(empty.is_idle());
    }

    #[test]
    fn test_timer_restarts_on_reconfiguration() {
        let base = Instant::now();
        let mut slider = slider(10, 3);
        slider.start(base);

        slider.on_viewport_change(1);
        assert!(!slider.timer_running());
        // First poll after the change only re-arms the timer
        let rearm = base + Duration::from_millis(2500);
        assert!(!slider.poll_timer(rearm));
        assert!(!slider.poll_timer(rearm + Duration::from_millis(1999)));
        assert!(slider.poll_timer(rearm + Duration::from_millis(2000)));

        slider.on_items_change(4);
        assert!(!slider.timer_running());
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn test_stop_releases_timer() {
        let base = Instant::now();
        let mut slider = slider(10, 1);
        slider.start(base);
        slider.stop();
        assert!(!slider.is_started());
        assert!(!slider.timer_running());
        assert!(!slider.poll_timer(base + Duration::from_secs(10)));
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn test_controls_follow_position() {
        let mut slider = slider(5, 3);
        assert!(!slider.can_go_prev());
        assert!(slider.can_go_next());
        slider.advance();
        slider.advance();
        assert!(slider.can_go_prev());
        assert!(!slider.can_go_next());
    }

    #[test]
    fn test_visible_range() {
        let mut slider = slider(5, 3);
        assert_eq!(slider.visible_range(), 0..3);
        slider.advance();
        assert_eq!(slider.visible_range(), 1..4);

        let short = self::slider(2, 3);
        assert_eq!(short.visible_range(), 0..2);
        assert_eq!(self::slider(0, 3).visible_range(), 0..0);
    }
}
