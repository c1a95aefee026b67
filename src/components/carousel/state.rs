//! Carousel index, drag tracking and per-card layout.

/// Number of project cards.
pub const PROJECT_COUNT: usize = 5;
/// Horizontal distance between card centres (320px card + 25px gap).
pub const CARD_WIDTH: f64 = 345.0;
/// Horizontal drag distance that flips to the neighbouring card.
pub const DRAG_THRESHOLD: f64 = 50.0;

/// Which way a navigation moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
	Next,
	Prev,
}

/// Tracks an in-progress drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
	pub active: bool,
	pub start_x: f64,
}

/// Resolved visual state for one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
	pub translate_x: f64,
	pub scale: f64,
	pub opacity: f64,
	pub blur_px: f64,
}

impl CardLayout {
	pub fn transform_css(&self) -> String {
		format!("translateX({}px) scale({})", self.translate_x, self.scale)
	}

	pub fn filter_css(&self) -> String {
		format!("blur({}px)", self.blur_px)
	}
}

/// Carousel over a fixed number of cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carousel {
	current: usize,
	total: usize,
	pub drag: DragState,
}

impl Default for Carousel {
	/// Five cards, centred on the middle one.
	fn default() -> Self {
		Self::new(PROJECT_COUNT, PROJECT_COUNT / 2)
	}
}

impl Carousel {
	/// `start` is clamped into range; `total` is at least one.
	pub fn new(total: usize, start: usize) -> Self {
		let total = total.max(1);
		Self {
			current: start.min(total - 1),
			total,
			drag: DragState::default(),
		}
	}

	pub fn current(&self) -> usize {
		self.current
	}

	pub fn total(&self) -> usize {
		self.total
	}

	pub fn next(&mut self) {
		self.current = (self.current + 1) % self.total;
	}

	pub fn prev(&mut self) {
		self.current = (self.current + self.total - 1) % self.total;
	}

	pub fn step(&mut self, step: Step) {
		match step {
			Step::Next => self.next(),
			Step::Prev => self.prev(),
		}
	}

	pub fn drag_start(&mut self, x: f64) {
		self.drag = DragState {
			active: true,
			start_x: x,
		};
	}

	/// Feeds a pointer move into the drag gesture.
	///
	/// Once the pointer has travelled past [`DRAG_THRESHOLD`] the carousel
	/// steps (left drag → next, right drag → previous) and the drag ends.
	pub fn drag_move(&mut self, x: f64) -> Option<Step> {
		if !self.drag.active {
			return None;
		}
		let delta = x - self.drag.start_x;
		if delta.abs() <= DRAG_THRESHOLD {
			return None;
		}
		let step = if delta > 0.0 { Step::Prev } else { Step::Next };
		self.step(step);
		self.drag.active = false;
		Some(step)
	}

	pub fn drag_end(&mut self) {
		self.drag.active = false;
	}

	/// Arrow keys navigate; returns the step taken, if any.
	pub fn handle_key(&mut self, key: &str) -> Option<Step> {
		let step = match key {
			"ArrowLeft" => Step::Prev,
			"ArrowRight" => Step::Next,
			_ => return None,
		};
		self.step(step);
		Some(step)
	}

	fn distance(&self, index: usize) -> usize {
		index.abs_diff(self.current)
	}

	pub fn translate_for(&self, index: usize) -> f64 {
		(index as f64 - self.current as f64) * CARD_WIDTH
	}

	pub fn scale_for(&self, index: usize) -> f64 {
		match self.distance(index) {
			0 => 1.3,
			1 => 1.0,
			2 => 0.85,
			_ => 0.7,
		}
	}

	pub fn opacity_for(&self, index: usize) -> f64 {
		match self.distance(index) {
			0 => 1.0,
			1 => 0.7,
			2 => 0.4,
			_ => 0.0,
		}
	}

	pub fn blur_for(&self, index: usize) -> f64 {
		match self.distance(index) {
			0 => 0.0,
			1 => 1.0,
			2 => 3.0,
			_ => 8.0,
		}
	}

	pub fn layout_for(&self, index: usize) -> CardLayout {
		CardLayout {
			translate_x: self.translate_for(index),
			scale: self.scale_for(index),
			opacity: self.opacity_for(index),
			blur_px: self.blur_for(index),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_on_the_centre_card() {
		let carousel = Carousel::default();
		assert_eq!(carousel.current(), 2);
		assert_eq!(carousel.total(), 5);
		assert!(!carousel.drag.active);
	}

	#[test]
	fn navigation_wraps_both_ways() {
		let mut carousel = Carousel::new(5, 4);
		carousel.next();
		assert_eq!(carousel.current(), 0);
		carousel.prev();
		assert_eq!(carousel.current(), 4);

		let mut carousel = Carousel::new(5, 0);
		carousel.prev();
		assert_eq!(carousel.current(), 4);
	}

	#[test]
	fn degenerate_sizes_are_clamped() {
		let mut single = Carousel::new(0, 9);
		assert_eq!((single.current(), single.total()), (0, 1));
		single.next();
		assert_eq!(single.current(), 0);
	}

	#[test]
	fn current_card_is_centred_and_enlarged() {
		for start in 0..PROJECT_COUNT {
			let carousel = Carousel::new(PROJECT_COUNT, start);
			let layout = carousel.layout_for(start);
			assert_eq!(layout.translate_x, 0.0);
			assert_eq!(layout.scale, 1.3);
			assert_eq!(layout.opacity, 1.0);
			assert_eq!(layout.blur_px, 0.0);
		}
	}

	#[test]
	fn neighbours_step_down_with_distance() {
		let carousel = Carousel::new(5, 2);
		let layouts: Vec<_> = (0..5).map(|i| carousel.layout_for(i)).collect();
		assert_eq!(layouts[0].translate_x, -690.0);
		assert_eq!(layouts[3].translate_x, 345.0);
		assert_eq!(
			layouts.iter().map(|l| l.scale).collect::<Vec<_>>(),
			vec![0.85, 1.0, 1.3, 1.0, 0.85]
		);
		assert_eq!(
			layouts.iter().map(|l| l.opacity).collect::<Vec<_>>(),
			vec![0.4, 0.7, 1.0, 0.7, 0.4]
		);

		let edge = Carousel::new(5, 0);
		assert_eq!(edge.scale_for(4), 0.7);
		assert_eq!(edge.opacity_for(3), 0.0);
		assert_eq!(edge.blur_for(3), 8.0);
		assert_eq!(edge.blur_for(2), 3.0);
		assert_eq!(edge.blur_for(1), 1.0);
	}

	#[test]
	fn layout_css() {
		let layout = Carousel::new(5, 2).layout_for(1);
		assert_eq!(layout.transform_css(), "translateX(-345px) scale(1)");
		assert_eq!(layout.filter_css(), "blur(1px)");
	}

	#[test]
	fn left_drag_past_threshold_steps_once() {
		let mut carousel = Carousel::new(5, 2);
		carousel.drag_start(100.0);
		assert_eq!(carousel.drag_move(60.0), None);
		assert_eq!(carousel.drag_move(40.0), Some(Step::Next));
		assert_eq!(carousel.current(), 3);
		assert!(!carousel.drag.active);
		assert_eq!(carousel.drag_move(-500.0), None);
		assert_eq!(carousel.current(), 3);
	}

	#[test]
	fn right_drag_steps_back() {
		let mut carousel = Carousel::new(5, 0);
		carousel.drag_start(10.0);
		assert_eq!(carousel.drag_move(61.0), Some(Step::Prev));
		assert_eq!(carousel.current(), 4);
	}

	#[test]
	fn exactly_threshold_does_not_step() {
		let mut carousel = Carousel::new(5, 2);
		carousel.drag_start(100.0);
		assert_eq!(carousel.drag_move(50.0), None);
		assert!(carousel.drag.active);
		carousel.drag_end();
		assert!(!carousel.drag.active);
		assert_eq!(carousel.current(), 2);
	}

	#[test]
	fn arrow_keys_navigate() {
		let mut carousel = Carousel::new(5, 2);
		assert_eq!(carousel.handle_key("ArrowRight"), Some(Step::Next));
		assert_eq!(carousel.handle_key("ArrowRight"), Some(Step::Next));
		assert_eq!(carousel.handle_key("ArrowRight"), Some(Step::Next));
		assert_eq!(carousel.current(), 0);
		assert_eq!(carousel.handle_key("ArrowLeft"), Some(Step::Prev));
		assert_eq!(carousel.current(), 4);
		assert_eq!(carousel.handle_key("Enter"), None);
		assert_eq!(carousel.current(), 4);
	}
}
