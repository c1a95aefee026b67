//! Scroll stages and the interpolation helpers built on them.
//!
//! Each stage is a scroll-offset range. A stage's progress is
//! `clamp((scroll - start) / span, 0, 1)`, and the end state of one stage is
//! the start state of the next, so motion stays continuous across stages.

/// A scroll-offset range in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
	pub start: f64,
	pub span: f64,
}

impl ScrollRange {
	pub const fn new(start: f64, span: f64) -> Self {
		Self { start, span }
	}

	pub fn end(&self) -> f64 {
		self.start + self.span
	}

	/// Fraction of this range covered at `scroll`, clamped to `[0, 1]`.
	pub fn progress(&self, scroll: f64) -> f64 {
		if self.span <= 0.0 {
			return if scroll >= self.start { 1.0 } else { 0.0 };
		}
		((scroll - self.start) / self.span).clamp(0.0, 1.0)
	}
}

/// Name blurs and lifts, portfolio image slides in.
pub const INTRO: ScrollRange = ScrollRange::new(0.0, 600.0);
/// Hero content rises off screen and the name fades out.
pub const NAME_EXIT: ScrollRange = ScrollRange::new(1500.0, 300.0);
/// Hero shrinks into a dark card while the page turns white.
pub const ZOOM: ScrollRange = ScrollRange::new(2000.0, 1500.0);
/// Shrunken hero slides right; about-me grows in behind it.
pub const SLIDE_OUT: ScrollRange = ScrollRange::new(3500.0, 500.0);
/// About-me shrinks and rises towards the header.
pub const ABOUT_SETTLE: ScrollRange = ScrollRange::new(4300.0, 500.0);

/// Offsets at which each headline word appears.
pub const WORD_THRESHOLDS: [f64; 4] = [1000.0, 1100.0, 1200.0, 1300.0];
/// The "keep scrolling" hint appears once the name has left.
pub const SCROLL_MESSAGE_AT: f64 = 1800.0;
/// Past this offset the scrolling content is layered above the stage.
pub const CONTENT_RAISE_AT: f64 = 4000.0;
/// Resting top edge of the settled about-me block.
pub const ABOUT_HEADER_TOP: f64 = 150.0;

/// `a` at `t = 0`, `b` at `t = 1`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
	a + (b - a) * t
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// Everything a region rule may read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
	pub scroll_y: f64,
	pub viewport: Viewport,
}

impl ScrollFrame {
	pub fn new(scroll_y: f64, width: f64, height: f64) -> Self {
		Self {
			scroll_y,
			viewport: Viewport { width, height },
		}
	}

	pub fn progress(&self, range: ScrollRange) -> f64 {
		range.progress(self.scroll_y)
	}

	/// Strictly beyond `offset`.
	pub fn past(&self, offset: f64) -> bool {
		self.scroll_y > offset
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn progress_is_clamped() {
		assert_eq!(NAME_EXIT.progress(0.0), 0.0);
		assert_eq!(NAME_EXIT.progress(1650.0), 0.5);
		assert_eq!(NAME_EXIT.progress(1800.0), 1.0);
		assert_eq!(NAME_EXIT.progress(9000.0), 1.0);
	}

	#[test]
	fn zero_span_is_a_step() {
		let step = ScrollRange::new(100.0, 0.0);
		assert_eq!(step.progress(99.0), 0.0);
		assert_eq!(step.progress(100.0), 1.0);
	}

	#[test]
	fn stages_do_not_overlap() {
		let ordered = [INTRO, NAME_EXIT, ZOOM, SLIDE_OUT, ABOUT_SETTLE];
		for pair in ordered.windows(2) {
			assert!(pair[0].end() <= pair[1].start, "{pair:?}");
		}
		assert!(WORD_THRESHOLDS.iter().all(|t| *t > INTRO.end() && *t < NAME_EXIT.start));
		assert_eq!(SCROLL_MESSAGE_AT, NAME_EXIT.end());
	}

	#[test]
	fn lerp_hits_both_ends() {
		assert_eq!(lerp(-300.0, 500.0, 0.0), -300.0);
		assert_eq!(lerp(-300.0, 500.0, 1.0), 500.0);
		assert_eq!(lerp(0.0, -150.0, 0.0), 0.0);
		assert!(lerp(0.0, -150.0, 0.0).is_sign_positive());
	}
}
