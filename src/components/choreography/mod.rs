//! Scroll-driven staging of the page.
//!
//! Every scroll event re-evaluates the whole choreography from the current
//! offset and viewport size:
//! - [`stages`]: the scroll ranges and interpolation helpers
//! - [`regions`]: one style rule per named page region, plus derived page state
//! - [`reveal`]: per-element entrances for story cards and timeline items
//!
//! The output is a pure function of its inputs; only [`apply_current`] and
//! [`apply_frame`] touch the DOM.

mod binding;
pub mod regions;
pub mod reveal;
pub mod stages;
pub mod style;

pub use binding::{RegionRefs, apply_current, apply_frame};
pub use regions::{PageState, REGION_RULES, Region, RegionRule};
pub use stages::{ScrollFrame, ScrollRange, Viewport};
pub use style::StylePatch;
