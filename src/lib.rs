//! folio-stage: scroll-choreographed animated portfolio page.
//!
//! This crate provides a WASM single-page portfolio with a particle
//! background, a staged scroll reveal of its sections, and a drag/keyboard
//! project carousel.

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlScriptElement};

pub mod components;
pub mod error;

pub use components::carousel::{Carousel, ProjectCarousel};
pub use components::choreography::{PageState, RegionRefs, ScrollFrame};
pub use components::contact::{ContactKind, ContactLinks, copy_to_clipboard};
pub use components::particle_field::{ParticleCanvas, PointerChannel, PointerPercent};
pub use components::types::PortfolioData;
pub use error::{PageError, PageResult};

use components::choreography::apply_current;
use error::{viewport_size, window};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio-stage: logging initialized");
}

/// Load page content from a script element with id="portfolio-data".
/// Expected format: JSON matching [`PortfolioData`]; missing fields use defaults.
fn load_portfolio_data() -> Option<PortfolioData> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PortfolioData::from_json(&json_text) {
		Ok(data) => {
			info!(
				"folio-stage: loaded {} projects, {} story cards, {} timeline entries",
				data.projects.len(),
				data.story.len(),
				data.timeline.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("folio-stage: failed to parse portfolio data: {}", e);
			None
		}
	}
}

/// Publishes the pointer as `--mouse-x`/`--mouse-y` for stylesheet parallax.
fn publish_css_pointer(pos: PointerPercent) -> PageResult<()> {
	let root: HtmlElement = window()?
		.document()
		.ok_or(PageError::NoDocument)?
		.document_element()
		.ok_or(PageError::NoDocument)?
		.dyn_into()
		.map_err(|_| PageError::NoDocument)?;
	let style = root.style();
	style.set_property("--mouse-x", &format!("{}%", pos.x))?;
	style.set_property("--mouse-y", &format!("{}%", pos.y))?;
	Ok(())
}

fn track_pointer(pointer: &PointerChannel, client_x: f64, client_y: f64) -> PageResult<()> {
	let (w, h) = viewport_size(&window()?)?;
	let pos = PointerPercent::from_client(client_x, client_y, w, h);
	pointer.publish(pos);
	publish_css_pointer(pos)
}

/// Main application component.
/// Loads page content from the DOM and wires the scroll choreography.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let PortfolioData {
		name,
		portrait,
		words,
		about,
		projects,
		story,
		timeline,
		contact,
	} = load_portfolio_data().unwrap_or_default();

	let pointer = PointerChannel::new();
	let regions = RegionRefs::new();
	let page = RwSignal::new(PageState::default());

	let refresh = move || match apply_current(&regions) {
		Ok(state) => {
			if page.with_untracked(|p| *p != state) {
				page.set(state);
			}
		}
		Err(err) => warn!("folio-stage: scroll update skipped: {err}"),
	};

	// Evaluate once after the regions mount, then on every scroll/resize.
	Effect::new(move |_| {
		if regions.zoom.get().is_some() {
			refresh();
		}
	});

	let pointer_writer = pointer.clone();
	let handles = [
		window_event_listener(ev::scroll, move |_| refresh()),
		window_event_listener(ev::resize, move |_| refresh()),
		window_event_listener(ev::mousemove, move |ev| {
			let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
			if let Err(err) = track_pointer(&pointer_writer, x, y) {
				warn!("folio-stage: pointer update skipped: {err}");
			}
		}),
	];
	on_cleanup(move || {
		for handle in handles {
			handle.remove();
		}
	});

	let word_spans = words
		.into_iter()
		.take(4)
		.enumerate()
		.map(|(index, word)| {
			view! {
				<span class="word" class:visible=move || page.with(|p| p.words_visible[index])>
					{word}
				</span>
			}
		})
		.collect_view();

	let story_cards = story
		.into_iter()
		.map(|card| {
			view! {
				<article class="story-card">
					<h3>{card.title}</h3>
					<p>{card.body}</p>
				</article>
			}
		})
		.collect_view();

	let timeline_items = timeline
		.into_iter()
		.map(|entry| {
			view! {
				<div class="timeline-item">
					<span class="timeline-period">{entry.period}</span>
					<h3>{entry.title}</h3>
					<p>{entry.body}</p>
				</div>
			}
		})
		.collect_view();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=format!("{name} | Portfolio") />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="page" style:background-color=move || page.with(|p| p.background.clone())>
			<div class="stage">
				<div class="zoom-container" node_ref=regions.zoom>
					<section class="hero">
						<div
							class="hero-bg"
							style:opacity=move || page.with(|p| p.hero_bg_opacity.to_string())
						>
							<ParticleCanvas pointer=pointer />
						</div>
						<div class="name-wrapper" node_ref=regions.name>
							<h1 class="hero-name">{name}</h1>
						</div>
						<img
							class="portfolio-img"
							node_ref=regions.portfolio_image
							src=portrait
							alt="Portrait"
							on:mouseenter=move |_| page.update(|p| p.show_portfolio_text())
							on:mouseleave=move |_| page.update(|p| p.hide_portfolio_text())
						/>
						<div
							class="portfolio-text"
							node_ref=regions.portfolio_text
							class:shown=move || page.with(|p| p.text_shown)
						>
							{word_spans}
						</div>
						<p
							class="scroll-message"
							class:visible=move || page.with(|p| p.show_scroll_message)
						>
							"Keep scrolling"
						</p>
					</section>
				</div>
				<div class="about-me-container" node_ref=regions.about_me>
					<h2>"About me"</h2>
					<p>{about}</p>
					<ProjectCarousel projects=projects />
					<ContactLinks contact=contact />
				</div>
			</div>
			<div class="scroll-content" node_ref=regions.scroll_content>
				<section class="story-section">{story_cards}</section>
				<section class="timeline">
					<div class="timeline-line"></div>
					{timeline_items}
				</section>
			</div>
		</main>
	}
}
