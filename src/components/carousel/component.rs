//! Leptos component for the project carousel.
//!
//! Drag gestures start only when the mouse goes down inside the carousel and
//! are then tracked on the window, so a drag that leaves the cards still
//! completes. Arrow keys navigate from anywhere on the page.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use log::debug;
use web_sys::{MouseEvent, TouchEvent};

use super::state::{Carousel, Step};
use crate::components::types::Project;

const TRACK_TRANSITION: &str = "transform 0.6s cubic-bezier(0.4, 0, 0.2, 1)";

fn log_step(step: Option<Step>, carousel: RwSignal<Carousel>) {
	if let Some(step) = step {
		debug!(
			"folio-stage: carousel {:?} -> card {}",
			step,
			carousel.with_untracked(|c| c.current())
		);
	}
}

fn first_touch_x(ev: &TouchEvent) -> Option<f64> {
	ev.touches().get(0).map(|t| t.page_x() as f64)
}

fn inside(wrapper: NodeRef<html::Div>, ev: &MouseEvent) -> bool {
	let Some(el) = wrapper.get_untracked() else {
		return false;
	};
	let rect = el.get_bounding_client_rect();
	let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
	x >= rect.left() && x <= rect.right() && y >= rect.top() && y <= rect.bottom()
}

fn set_track_transition(track: NodeRef<html::Div>, value: &str) {
	if let Some(el) = track.get_untracked() {
		let _ = web_sys::HtmlElement::style(&el).set_property("transition", value);
	}
}

/// Horizontally scrolling project cards with a focused centre card.
#[component]
pub fn ProjectCarousel(projects: Vec<Project>) -> impl IntoView {
	let carousel = RwSignal::new(Carousel::new(projects.len(), projects.len() / 2));
	let wrapper = NodeRef::<html::Div>::new();
	let track = NodeRef::<html::Div>::new();

	let begin = move |x: f64| {
		carousel.update(|c| c.drag_start(x));
		set_track_transition(track, "none");
	};
	let advance = move |x: f64| {
		if !carousel.with_untracked(|c| c.drag.active) {
			return;
		}
		let mut step = None;
		carousel.update(|c| step = c.drag_move(x));
		log_step(step, carousel);
	};
	let finish = move || {
		if carousel.with_untracked(|c| c.drag.active) {
			carousel.update(|c| c.drag_end());
		}
		set_track_transition(track, TRACK_TRANSITION);
	};

	let handles = [
		window_event_listener(ev::mousedown, move |ev| {
			if inside(wrapper, &ev) {
				begin(ev.page_x() as f64);
			}
		}),
		window_event_listener(ev::mousemove, move |ev| advance(ev.page_x() as f64)),
		window_event_listener(ev::mouseup, move |_| finish()),
		window_event_listener(ev::keydown, move |ev| {
			let mut step = None;
			carousel.update(|c| step = c.handle_key(&ev.key()));
			log_step(step, carousel);
		}),
	];
	on_cleanup(move || {
		for handle in handles {
			handle.remove();
		}
	});

	let cards = projects
		.into_iter()
		.enumerate()
		.map(|(index, project)| {
			let layout = move || carousel.with(|c| c.layout_for(index));
			view! {
				<article
					class="project-card"
					class:active=move || carousel.with(|c| c.current() == index)
					style:transform=move || layout().transform_css()
					style:opacity=move || layout().opacity.to_string()
					style:filter=move || layout().filter_css()
				>
					<img src=project.image alt=project.title.clone() draggable="false" />
					<h3>{project.title}</h3>
					<p>{project.description}</p>
					{project
						.link
						.map(|href| {
							view! {
								<a href=href target="_blank" rel="noopener">
									"View project"
								</a>
							}
						})}
				</article>
			}
		})
		.collect_view();

	view! {
		<div
			class="portfolio-carousel-wrapper"
			node_ref=wrapper
			on:touchstart=move |ev: TouchEvent| {
				if let Some(x) = first_touch_x(&ev) {
					begin(x);
				}
			}
			on:touchmove=move |ev: TouchEvent| {
				if let Some(x) = first_touch_x(&ev) {
					advance(x);
				}
			}
			on:touchend=move |_| finish()
		>
			<button
				class="carousel-nav prev"
				aria-label="Previous project"
				on:click=move |_| {
					carousel.update(|c| c.prev());
					log_step(Some(Step::Prev), carousel);
				}
			>
				"‹"
			</button>
			<div class="carousel-track" node_ref=track style:transition=TRACK_TRANSITION>
				{cards}
			</div>
			<button
				class="carousel-nav next"
				aria-label="Next project"
				on:click=move |_| {
					carousel.update(|c| c.next());
					log_step(Some(Step::Next), carousel);
				}
			>
				"›"
			</button>
		</div>
	}
}
