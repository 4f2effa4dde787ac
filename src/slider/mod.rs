//! Carousel windowing shared by the artist and album sliders

mod controller;
pub mod viewport;

pub use controller::{DEFAULT_SWIPE_THRESHOLD_PX, SliderController, SwipeOutcome};
