//! Region rules: one style mapping per named page region.
//!
//! The table [`REGION_RULES`] is evaluated top to bottom on every scroll
//! event. Each rule is a pure function of the [`ScrollFrame`], which keeps
//! every region testable on its own.

use super::stages::{
	ABOUT_HEADER_TOP, ABOUT_SETTLE, CONTENT_RAISE_AT, INTRO, NAME_EXIT, SCROLL_MESSAGE_AT,
	SLIDE_OUT, ScrollFrame, WORD_THRESHOLDS, ZOOM, lerp,
};
use super::style::{StylePatch, num, px};
use crate::components::theme::Color;

/// A page region whose inline style is driven by scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
	/// Hero name block.
	Name,
	/// Portrait that slides in beside the name.
	PortfolioImage,
	/// Headline words under the portrait.
	PortfolioText,
	/// Wrapper around the hero that shrinks into a card.
	Zoom,
	/// About-me block revealed behind the hero.
	AboutMe,
	/// Scrolling story and timeline content.
	ScrollContent,
}

/// Maps a scroll frame to the inline style of one region.
#[derive(Clone, Copy)]
pub struct RegionRule {
	pub region: Region,
	pub style: fn(&ScrollFrame) -> StylePatch,
}

/// All region rules, in application order.
pub const REGION_RULES: &[RegionRule] = &[
	RegionRule {
		region: Region::Name,
		style: name_style,
	},
	RegionRule {
		region: Region::PortfolioImage,
		style: portfolio_image_style,
	},
	RegionRule {
		region: Region::PortfolioText,
		style: portfolio_text_style,
	},
	RegionRule {
		region: Region::Zoom,
		style: zoom_style,
	},
	RegionRule {
		region: Region::AboutMe,
		style: about_me_style,
	},
	RegionRule {
		region: Region::ScrollContent,
		style: scroll_content_style,
	},
];

/// Extra upward travel shared by everything leaving the hero.
fn exit_lift(frame: &ScrollFrame) -> f64 {
	lerp(0.0, -300.0, frame.progress(NAME_EXIT))
}

pub fn name_style(frame: &ScrollFrame) -> StylePatch {
	let intro = frame.progress(INTRO);
	let exit = frame.progress(NAME_EXIT);
	let rise = lerp(0.0, -150.0, intro);

	StylePatch::new()
		.set("filter", format!("blur({})", px(lerp(0.0, 20.0, intro))))
		.set("transform", format!("translateY({})", px(rise + exit_lift(frame))))
		.set("opacity", num(1.0 - exit))
}

pub fn portfolio_image_style(frame: &ScrollFrame) -> StylePatch {
	let intro = frame.progress(INTRO);
	let end_left = frame.viewport.width / 2.0 - 100.0;

	StylePatch::new()
		.set("left", px(lerp(-300.0, end_left, intro)))
		.set("opacity", num(intro))
		.set(
			"transform",
			format!("translateY(calc(-50% + {}))", px(exit_lift(frame))),
		)
}

pub fn portfolio_text_style(frame: &ScrollFrame) -> StylePatch {
	StylePatch::new().set(
		"transform",
		format!("translateX(-50%) translateY({})", px(exit_lift(frame))),
	)
}

pub fn zoom_style(frame: &ScrollFrame) -> StylePatch {
	let mut patch = if frame.past(ZOOM.start) {
		let zoom = frame.progress(ZOOM);
		let shadow = if zoom > 0.3 {
			let depth = (zoom - 0.3) * 60.0;
			format!("0 {} {} rgba(0, 0, 0, 0.3)", px(depth), px(depth * 2.0))
		} else {
			"none".to_string()
		};
		StylePatch::new()
			.set("transform", format!("scale({})", num(lerp(1.0, 0.15, zoom))))
			.set("border-radius", px(lerp(0.0, 30.0, zoom)))
			.set("background", "#000000")
			.set("box-shadow", shadow)
			.set("opacity", "1")
	} else {
		StylePatch::new()
			.set("transform", "scale(1)")
			.set("border-radius", "0px")
			.set("box-shadow", "none")
			.set("background", "transparent")
			.set("opacity", "1")
	};

	if frame.past(SLIDE_OUT.start) {
		let slide = frame.progress(SLIDE_OUT);
		patch = patch
			.set(
				"transform",
				format!("scale(0.15) translateX({})", px(lerp(0.0, 2500.0, slide))),
			)
			.set("opacity", num(1.0 - slide));
	}
	patch
}

pub fn about_me_style(frame: &ScrollFrame) -> StylePatch {
	if !frame.past(SLIDE_OUT.start) {
		return StylePatch::new()
			.set("transform", "translate(-50%, -50%) scale(0.3)")
			.set("opacity", "0")
			.set("filter", "blur(30px)");
	}

	if !frame.past(SLIDE_OUT.end()) {
		let entrance = frame.progress(SLIDE_OUT);
		return StylePatch::new()
			.set(
				"transform",
				format!(
					"translate(-50%, -50%) scale({})",
					num(lerp(0.3, 1.0, entrance))
				),
			)
			.set("opacity", num(entrance))
			.set("filter", format!("blur({})", px(lerp(30.0, 0.0, entrance))));
	}

	let settled_y = ABOUT_HEADER_TOP - frame.viewport.height / 2.0;
	let (y, scale) = if !frame.past(ABOUT_SETTLE.start) {
		(0.0, 1.0)
	} else if !frame.past(ABOUT_SETTLE.end()) {
		let settle = frame.progress(ABOUT_SETTLE);
		(lerp(0.0, settled_y, settle), lerp(1.0, 0.3, settle))
	} else {
		(settled_y - (frame.scroll_y - ABOUT_SETTLE.end()), 0.3)
	};

	StylePatch::new()
		.set(
			"transform",
			format!(
				"translate(-50%, calc(-50% + {})) scale({})",
				px(y),
				num(scale)
			),
		)
		.set("opacity", "1")
		.set("filter", "blur(0px)")
}

pub fn scroll_content_style(frame: &ScrollFrame) -> StylePatch {
	let layer = if frame.past(CONTENT_RAISE_AT) { "10" } else { "1" };
	StylePatch::new().set("z-index", layer)
}

/// Component-level state derived from the scroll offset.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
	pub words_visible: [bool; 4],
	pub text_shown: bool,
	pub show_scroll_message: bool,
	/// CSS color of the page behind the zooming hero.
	pub background: String,
	pub hero_bg_opacity: f64,
}

impl Default for PageState {
	fn default() -> Self {
		Self {
			words_visible: [false; 4],
			text_shown: false,
			show_scroll_message: false,
			background: Color::BLACK.to_css(),
			hero_bg_opacity: 1.0,
		}
	}
}

impl PageState {
	pub fn from_frame(frame: &ScrollFrame) -> Self {
		let words_visible = WORD_THRESHOLDS.map(|threshold| frame.scroll_y >= threshold);
		let (background, hero_bg_opacity) = if frame.past(ZOOM.start) {
			let zoom = frame.progress(ZOOM);
			(
				Color::BLACK.lerp(Color::WHITE, zoom).to_css_rgb_fn(),
				1.0 - zoom,
			)
		} else {
			(Color::BLACK.to_css(), 1.0)
		};

		Self {
			words_visible,
			text_shown: words_visible.iter().any(|v| *v),
			show_scroll_message: frame.scroll_y >= SCROLL_MESSAGE_AT,
			background,
			hero_bg_opacity,
		}
	}

	/// Reveals every headline word regardless of scroll.
	pub fn show_portfolio_text(&mut self) {
		self.words_visible = [true; 4];
		self.text_shown = true;
	}

	pub fn hide_portfolio_text(&mut self) {
		self.words_visible = [false; 4];
		self.text_shown = false;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(scroll_y: f64) -> ScrollFrame {
		ScrollFrame::new(scroll_y, 1200.0, 800.0)
	}

	fn number(patch: &StylePatch, name: &str) -> f64 {
		patch.get(name).and_then(|v| v.parse().ok()).unwrap()
	}

	fn inside(value: &str, prefix: &str, suffix: &str) -> f64 {
		value
			.strip_prefix(prefix)
			.and_then(|v| v.strip_suffix(suffix))
			.and_then(|v| v.parse().ok())
			.unwrap_or_else(|| panic!("unexpected value {value}"))
	}

	#[test]
	fn every_region_has_one_rule() {
		let regions = [
			Region::Name,
			Region::PortfolioImage,
			Region::PortfolioText,
			Region::Zoom,
			Region::AboutMe,
			Region::ScrollContent,
		];
		for region in regions {
			assert_eq!(
				REGION_RULES.iter().filter(|r| r.region == region).count(),
				1,
				"{region:?}"
			);
		}
	}

	#[test]
	fn intro_is_monotonic_and_complete_at_600() {
		let mut last = (0.0, 0.0);
		for s in (0..=600).step_by(25) {
			let patch = name_style(&at(s as f64));
			let blur = inside(patch.get("filter").unwrap(), "blur(", "px)");
			let rise = inside(patch.get("transform").unwrap(), "translateY(", "px)");
			assert!(blur >= last.0 && rise <= last.1, "s={s}");
			assert_eq!(number(&patch, "opacity"), 1.0);
			last = (blur, rise);
		}
		assert_eq!(last, (20.0, -150.0));

		let past = name_style(&at(900.0));
		assert_eq!(past.get("filter"), Some("blur(20px)"));
		assert_eq!(past.get("transform"), Some("translateY(-150px)"));
	}

	#[test]
	fn name_fades_out_across_exit_stage() {
		for s in [1500.0, 1575.0, 1650.0, 1725.0, 1800.0] {
			let expected = 1.0 - ((s - 1500.0) / 300.0_f64).min(1.0);
			let opacity = number(&name_style(&at(s)), "opacity");
			assert!((opacity - expected).abs() < 1e-4, "s={s}");
		}
		let gone = name_style(&at(1800.0));
		assert_eq!(gone.get("opacity"), Some("0"));
		assert_eq!(gone.get("transform"), Some("translateY(-450px)"));
		assert!(PageState::from_frame(&at(1800.0)).show_scroll_message);
		assert!(!PageState::from_frame(&at(1799.0)).show_scroll_message);
	}

	#[test]
	fn portfolio_image_slides_to_centre() {
		let start = portfolio_image_style(&at(0.0));
		assert_eq!(start.get("left"), Some("-300px"));
		assert_eq!(start.get("opacity"), Some("0"));
		let end = portfolio_image_style(&at(600.0));
		assert_eq!(end.get("left"), Some("500px"));
		assert_eq!(end.get("opacity"), Some("1"));
		assert_eq!(end.get("transform"), Some("translateY(calc(-50% + 0px))"));
		let lifted = portfolio_image_style(&at(1650.0));
		assert_eq!(
			lifted.get("transform"),
			Some("translateY(calc(-50% + -150px))")
		);
	}

	#[test]
	fn portfolio_text_rises_with_the_name() {
		assert_eq!(
			portfolio_text_style(&at(1800.0)).get("transform"),
			Some("translateX(-50%) translateY(-300px)")
		);
	}

	#[test]
	fn words_appear_at_their_thresholds() {
		assert_eq!(PageState::from_frame(&at(999.0)).words_visible, [false; 4]);
		let partial = PageState::from_frame(&at(1150.0));
		assert_eq!(partial.words_visible, [true, true, false, false]);
		assert!(partial.text_shown);
		assert_eq!(PageState::from_frame(&at(1300.0)).words_visible, [true; 4]);
	}

	#[test]
	fn portfolio_text_can_be_forced() {
		let mut state = PageState::from_frame(&at(0.0));
		state.show_portfolio_text();
		assert_eq!(state.words_visible, [true; 4]);
		assert!(state.text_shown);
		state.hide_portfolio_text();
		assert_eq!(state.words_visible, [false; 4]);
		assert!(!state.text_shown);
	}

	#[test]
	fn zoom_resets_before_its_stage() {
		let patch = zoom_style(&at(2000.0));
		assert_eq!(patch.get("transform"), Some("scale(1)"));
		assert_eq!(patch.get("background"), Some("transparent"));
		assert_eq!(patch.get("box-shadow"), Some("none"));
		let state = PageState::from_frame(&at(2000.0));
		assert_eq!(state.background, "#000000");
		assert_eq!(state.hero_bg_opacity, 1.0);
	}

	#[test]
	fn zoom_shrinks_to_a_dark_card() {
		let mid = zoom_style(&at(2750.0));
		assert_eq!(mid.get("transform"), Some("scale(0.575)"));
		assert_eq!(mid.get("border-radius"), Some("15px"));
		assert_eq!(mid.get("background"), Some("#000000"));
		assert_eq!(mid.get("box-shadow"), Some("0 12px 24px rgba(0, 0, 0, 0.3)"));

		let early = zoom_style(&at(2300.0));
		assert_eq!(early.get("box-shadow"), Some("none"));

		let done = zoom_style(&at(3500.0));
		assert_eq!(done.get("transform"), Some("scale(0.15)"));
		assert_eq!(done.get("border-radius"), Some("30px"));

		let state = PageState::from_frame(&at(2750.0));
		assert_eq!(state.background, "rgb(127, 127, 127)");
		assert_eq!(state.hero_bg_opacity, 0.5);
		assert_eq!(
			PageState::from_frame(&at(3500.0)).background,
			"rgb(255, 255, 255)"
		);
	}

	#[test]
	fn zoom_card_slides_out_and_stays_out() {
		let mid = zoom_style(&at(3750.0));
		assert_eq!(mid.get("transform"), Some("scale(0.15) translateX(1250px)"));
		assert_eq!(mid.get("opacity"), Some("0.5"));
		let gone = zoom_style(&at(6000.0));
		assert_eq!(gone.get("transform"), Some("scale(0.15) translateX(2500px)"));
		assert_eq!(gone.get("opacity"), Some("0"));
	}

	#[test]
	fn about_me_enters_then_settles() {
		let hidden = about_me_style(&at(3500.0));
		assert_eq!(hidden.get("opacity"), Some("0"));
		assert_eq!(hidden.get("filter"), Some("blur(30px)"));

		let entering = about_me_style(&at(3750.0));
		assert_eq!(
			entering.get("transform"),
			Some("translate(-50%, -50%) scale(0.65)")
		);
		assert_eq!(entering.get("opacity"), Some("0.5"));
		assert_eq!(entering.get("filter"), Some("blur(15px)"));

		let entered = about_me_style(&at(4000.0));
		assert_eq!(entered.get("transform"), Some("translate(-50%, -50%) scale(1)"));
		assert_eq!(entered.get("filter"), Some("blur(0px)"));

		let holding = about_me_style(&at(4200.0));
		assert_eq!(
			holding.get("transform"),
			Some("translate(-50%, calc(-50% + 0px)) scale(1)")
		);

		// settled_y = 150 - 800 / 2 = -250
		let settling = about_me_style(&at(4550.0));
		assert_eq!(
			settling.get("transform"),
			Some("translate(-50%, calc(-50% + -125px)) scale(0.65)")
		);
		let settled = about_me_style(&at(4800.0));
		assert_eq!(
			settled.get("transform"),
			Some("translate(-50%, calc(-50% + -250px)) scale(0.3)")
		);
		let drifting = about_me_style(&at(4900.0));
		assert_eq!(
			drifting.get("transform"),
			Some("translate(-50%, calc(-50% + -350px)) scale(0.3)")
		);
	}

	#[test]
	fn content_is_raised_after_about_me_lands() {
		assert_eq!(scroll_content_style(&at(4000.0)).get("z-index"), Some("1"));
		assert_eq!(scroll_content_style(&at(4001.0)).get("z-index"), Some("10"));
	}
}
