//! Leptos component wrapping the particle canvas.
//!
//! The canvas fills the viewport and reseeds its particles whenever the window
//! resizes. Painting runs in a [`FrameLoop`] that is cancelled when the
//! component is torn down.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::frame_loop::FrameLoop;
use super::particles::ParticleField;
use super::pointer::PointerChannel;
use super::render;
use crate::components::theme::FieldStyle;
use crate::error::{PageError, PageResult, viewport_size, window};

/// Field state plus the generator feeding its randomness.
struct FieldContext {
	field: ParticleField,
	rng: SmallRng,
}

fn context_2d(canvas: &HtmlCanvasElement) -> PageResult<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")?
		.ok_or(PageError::NoCanvasContext)?
		.dyn_into()
		.map_err(|_| PageError::NoCanvasContext)
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) -> PageResult<(f64, f64)> {
	let (w, h) = viewport_size(&window()?)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	Ok((w, h))
}

/// Renders the ambient particle background.
///
/// `pointer` is read once per frame; whoever tracks the mouse publishes into
/// the same channel.
#[component]
pub fn ParticleCanvas(
	pointer: PointerChannel,
	#[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));

	let context_init = context.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		match start(&canvas, &context_init, pointer.clone()) {
			Ok(frames) => on_cleanup(move || frames.cancel()),
			Err(err) => warn!("folio-stage: particle field disabled: {err}"),
		}
	});

	let context_resize = context.clone();
	let resize = window_event_listener(leptos::ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		match fit_to_viewport(&canvas) {
			Ok((w, h)) => {
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					let FieldContext { field, rng } = c;
					field.reset(w, h, rng);
					info!("folio-stage: particle field reset to {w}x{h}");
				}
			}
			Err(err) => warn!("folio-stage: resize ignored: {err}"),
		}
	});
	on_cleanup(move || resize.remove());

	view! {
		<canvas
			node_ref=canvas_ref
			class=class.unwrap_or_else(|| "particle-canvas".to_string())
			style="display: block; pointer-events: none;"
		/>
	}
}

fn start(
	canvas: &HtmlCanvasElement,
	context: &Rc<RefCell<Option<FieldContext>>>,
	pointer: PointerChannel,
) -> PageResult<FrameLoop> {
	let ctx = context_2d(canvas)?;
	let (w, h) = fit_to_viewport(canvas)?;

	let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
	let field = ParticleField::new(FieldStyle::default(), w, h, &mut rng);
	info!(
		"folio-stage: particle field seeded with {} particles",
		field.particles.len()
	);
	*context.borrow_mut() = Some(FieldContext { field, rng });

	let context_anim = context.clone();
	FrameLoop::start(move || {
		if let Some(ref mut c) = *context_anim.borrow_mut() {
			let FieldContext { field, rng } = c;
			let (px, py) = pointer.read().to_surface(field.width(), field.height());
			field.tick(px, py, rng);
			render::render(field, &ctx);
		}
	})
}
