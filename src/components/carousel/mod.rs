//! Project carousel.
//!
//! A fixed row of project cards centred on the current one. Cards further
//! from the centre shrink, fade and blur. Navigation by drag, touch swipe,
//! arrow keys or the side buttons; the index wraps at both ends.

mod component;
pub mod state;

pub use component::ProjectCarousel;
pub use state::{CARD_WIDTH, Carousel, CardLayout, PROJECT_COUNT, Step};
