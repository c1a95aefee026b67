//! Applies the scroll choreography to live DOM elements.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::regions::{PageState, REGION_RULES, Region};
use super::reveal::{STORY_CARD_REVEAL, TIMELINE_ITEM_REVEAL, TIMELINE_LINE_GROWTH};
use super::stages::ScrollFrame;
use crate::error::{PageError, PageResult, viewport_size, window};

pub const STORY_CARD_SELECTOR: &str = ".story-card";
pub const TIMELINE_ITEM_SELECTOR: &str = ".timeline-item";
pub const TIMELINE_LINE_SELECTOR: &str = ".timeline-line";

/// Handles to every region the choreography drives.
///
/// Any handle that is not mounted is skipped for that frame.
#[derive(Clone, Copy)]
pub struct RegionRefs {
	pub name: NodeRef<html::Div>,
	pub portfolio_image: NodeRef<html::Img>,
	pub portfolio_text: NodeRef<html::Div>,
	pub zoom: NodeRef<html::Div>,
	pub about_me: NodeRef<html::Div>,
	pub scroll_content: NodeRef<html::Div>,
}

impl Default for RegionRefs {
	fn default() -> Self {
		Self {
			name: NodeRef::new(),
			portfolio_image: NodeRef::new(),
			portfolio_text: NodeRef::new(),
			zoom: NodeRef::new(),
			about_me: NodeRef::new(),
			scroll_content: NodeRef::new(),
		}
	}
}

impl RegionRefs {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn element(&self, region: Region) -> Option<HtmlElement> {
		match region {
			Region::Name => self.name.get_untracked().map(Into::into),
			Region::PortfolioImage => self.portfolio_image.get_untracked().map(Into::into),
			Region::PortfolioText => self.portfolio_text.get_untracked().map(Into::into),
			Region::Zoom => self.zoom.get_untracked().map(Into::into),
			Region::AboutMe => self.about_me.get_untracked().map(Into::into),
			Region::ScrollContent => self.scroll_content.get_untracked().map(Into::into),
		}
	}
}

/// Collects the HTML elements matching `selector` under `root`.
fn query_all(root: &Element, selector: &str) -> PageResult<Vec<HtmlElement>> {
	let list = root.query_selector_all(selector)?;
	Ok((0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.collect())
}

/// Element tops measured before any style is written.
struct Measured {
	story_cards: Vec<(HtmlElement, f64)>,
	timeline_items: Vec<(HtmlElement, f64)>,
	timeline_line: Option<(HtmlElement, f64)>,
}

fn with_top(el: HtmlElement) -> (HtmlElement, f64) {
	let top = el.get_bounding_client_rect().top();
	(el, top)
}

fn measure(refs: &RegionRefs, document: &Document) -> PageResult<Measured> {
	let story_cards = match refs.element(Region::ScrollContent) {
		Some(content) => query_all(&content.into(), STORY_CARD_SELECTOR)?,
		None => Vec::new(),
	};
	let root = document.document_element().ok_or(PageError::NoDocument)?;
	let timeline_items = query_all(&root, TIMELINE_ITEM_SELECTOR)?;
	let timeline_line = document
		.query_selector(TIMELINE_LINE_SELECTOR)?
		.and_then(|el| el.dyn_into::<HtmlElement>().ok());

	Ok(Measured {
		story_cards: story_cards.into_iter().map(with_top).collect(),
		timeline_items: timeline_items.into_iter().map(with_top).collect(),
		timeline_line: timeline_line.map(with_top),
	})
}

/// Evaluates every rule for `frame` and writes the resulting inline styles.
///
/// Bounding boxes are all read first so no write invalidates a later read.
pub fn apply_frame(refs: &RegionRefs, document: &Document, frame: &ScrollFrame) -> PageResult<PageState> {
	let measured = measure(refs, document)?;
	let height = frame.viewport.height;

	for rule in REGION_RULES {
		if let Some(el) = refs.element(rule.region) {
			(rule.style)(frame).apply(&el)?;
		}
	}

	for (index, (card, top)) in measured.story_cards.iter().enumerate() {
		STORY_CARD_REVEAL.evaluate(*top, height, index).to_patch().apply(card)?;
	}
	if let Some((line, top)) = &measured.timeline_line {
		if let Some(patch) = TIMELINE_LINE_GROWTH.patch(*top, height) {
			patch.apply(line)?;
		}
	}
	for (index, (item, top)) in measured.timeline_items.iter().enumerate() {
		TIMELINE_ITEM_REVEAL.evaluate(*top, height, index).to_patch().apply(item)?;
	}

	Ok(PageState::from_frame(frame))
}

/// Reads the live scroll offset and viewport, then applies the choreography.
pub fn apply_current(refs: &RegionRefs) -> PageResult<PageState> {
	let win = window()?;
	let document = win.document().ok_or(PageError::NoDocument)?;
	let (width, height) = viewport_size(&win)?;
	let scroll_y = win.scroll_y()?;
	apply_frame(refs, &document, &ScrollFrame::new(scroll_y, width, height))
}
