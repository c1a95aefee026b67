//! Per-element reveals keyed on each element's own position in the viewport.
//!
//! Unlike the region rules these ignore the global scroll offset: an element
//! starts revealing when its top edge crosses a trigger line placed at a
//! fraction of the viewport height.

use super::style::{StylePatch, num, px};

/// Slide-and-fade entrance for a repeated list of elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealRule {
	/// Trigger line as a fraction of viewport height.
	pub trigger_ratio: f64,
	/// Distance past the trigger line over which the reveal completes.
	pub span: f64,
	/// Horizontal distance the element slides in from.
	pub entrance_offset: f64,
}

pub const STORY_CARD_REVEAL: RevealRule = RevealRule {
	trigger_ratio: 0.85,
	span: 300.0,
	entrance_offset: 100.0,
};

pub const TIMELINE_ITEM_REVEAL: RevealRule = RevealRule {
	trigger_ratio: 0.85,
	span: 400.0,
	entrance_offset: 50.0,
};

/// Evaluated entrance state for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
	pub opacity: f64,
	pub translate_x: f64,
}

impl Reveal {
	pub fn to_patch(self) -> StylePatch {
		StylePatch::new()
			.set("opacity", num(self.opacity))
			.set("transform", format!("translateX({})", px(self.translate_x)))
	}
}

impl RevealRule {
	/// Even indices enter from the left, odd ones from the right.
	pub fn direction(index: usize) -> f64 {
		if index % 2 == 0 { -1.0 } else { 1.0 }
	}

	pub fn evaluate(&self, top: f64, viewport_height: f64, index: usize) -> Reveal {
		let trigger = viewport_height * self.trigger_ratio;
		let start_x = Self::direction(index) * self.entrance_offset;

		if top < trigger {
			let progress = ((trigger - top) / self.span).min(1.0);
			Reveal {
				opacity: progress,
				translate_x: start_x * (1.0 - progress),
			}
		} else {
			Reveal {
				opacity: 0.0,
				translate_x: start_x,
			}
		}
	}
}

/// The timeline's spine grows as it scrolls into view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineGrowth {
	pub trigger_ratio: f64,
	pub span: f64,
}

pub const TIMELINE_LINE_GROWTH: LineGrowth = LineGrowth {
	trigger_ratio: 0.9,
	span: 800.0,
};

impl LineGrowth {
	/// Height in percent, or `None` while the line is still below the trigger
	/// (its height is then left untouched).
	pub fn height_percent(&self, top: f64, viewport_height: f64) -> Option<f64> {
		let trigger = viewport_height * self.trigger_ratio;
		(top < trigger).then(|| ((trigger - top) / self.span).min(1.0) * 100.0)
	}

	pub fn patch(&self, top: f64, viewport_height: f64) -> Option<StylePatch> {
		self.height_percent(top, viewport_height)
			.map(|h| StylePatch::new().set("height", format!("{}%", num(h))))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hidden_below_trigger_with_alternating_offsets() {
		// Trigger line at 850 for a 1000px viewport.
		let even = STORY_CARD_REVEAL.evaluate(900.0, 1000.0, 0);
		assert_eq!(
			even,
			Reveal {
				opacity: 0.0,
				translate_x: -100.0
			}
		);
		let odd = STORY_CARD_REVEAL.evaluate(850.0, 1000.0, 3);
		assert_eq!(
			odd,
			Reveal {
				opacity: 0.0,
				translate_x: 100.0
			}
		);
	}

	#[test]
	fn story_cards_reveal_over_three_hundred_pixels() {
		let half = STORY_CARD_REVEAL.evaluate(700.0, 1000.0, 0);
		assert_eq!(half.opacity, 0.5);
		assert_eq!(half.translate_x, -50.0);
		let full = STORY_CARD_REVEAL.evaluate(-2000.0, 1000.0, 1);
		assert_eq!(full.opacity, 1.0);
		assert_eq!(full.translate_x, 0.0);
	}

	#[test]
	fn timeline_items_use_shorter_offset_and_longer_span() {
		let quarter = TIMELINE_ITEM_REVEAL.evaluate(750.0, 1000.0, 1);
		assert_eq!(quarter.opacity, 0.25);
		assert_eq!(quarter.translate_x, 37.5);
		assert_eq!(
			quarter.to_patch().get("transform"),
			Some("translateX(37.5px)")
		);
	}

	#[test]
	fn line_grows_only_past_trigger() {
		assert_eq!(TIMELINE_LINE_GROWTH.height_percent(950.0, 1000.0), None);
		assert_eq!(
			TIMELINE_LINE_GROWTH.height_percent(500.0, 1000.0),
			Some(50.0)
		);
		let patch = TIMELINE_LINE_GROWTH.patch(-1000.0, 1000.0).unwrap();
		assert_eq!(patch.get("height"), Some("100%"));
	}
}
