//! Cancellable `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU32, Ordering};

use wasm_bindgen::prelude::*;

use crate::error::{PageResult, window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

static NEXT_LOOP_ID: AtomicU32 = AtomicU32::new(1);

thread_local! {
	// Callbacks of running loops; an entry is dropped on cancel.
	static CALLBACKS: RefCell<HashMap<u32, FrameCallback>> = RefCell::new(HashMap::new());
}

/// Handle to a running frame loop.
///
/// Cloneable and `Send`, so it can be moved into a cleanup hook. After
/// [`FrameLoop::cancel`] the pending frame is withdrawn, the callback is
/// never scheduled again, and everything it captured is dropped.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
	id: u32,
	cancelled: Arc<AtomicBool>,
	pending: Arc<AtomicI32>,
}

impl FrameLoop {
	/// Runs `frame` once per display refresh until cancelled.
	pub fn start(mut frame: impl FnMut() + 'static) -> PageResult<Self> {
		let handle = FrameLoop {
			id: NEXT_LOOP_ID.fetch_add(1, Ordering::Relaxed),
			..FrameLoop::default()
		};
		let callback: FrameCallback = Rc::new(RefCell::new(None));

		let (callback_inner, handle_inner) = (callback.clone(), handle.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			if handle_inner.is_cancelled() {
				return;
			}
			frame();
			if handle_inner.is_cancelled() {
				return;
			}
			if let Some(ref cb) = *callback_inner.borrow() {
				if let Err(err) = handle_inner.schedule(cb) {
					log::warn!("folio-stage: frame loop stopped: {err}");
				}
			}
		}));

		CALLBACKS.with_borrow_mut(|callbacks| callbacks.insert(handle.id, callback.clone()));
		if let Some(ref cb) = *callback.borrow() {
			handle.schedule(cb)?;
		}
		Ok(handle)
	}

	fn schedule(&self, cb: &Closure<dyn FnMut()>) -> PageResult<()> {
		let id = window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
		self.pending.store(id, Ordering::Relaxed);
		Ok(())
	}

	/// Whether [`FrameLoop::cancel`] has been called on this loop or a clone.
	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Relaxed)
	}

	/// Whether the frame callback is still held in memory.
	pub fn holds_callback(&self) -> bool {
		CALLBACKS.with_borrow(|callbacks| callbacks.contains_key(&self.id))
	}

	/// Stops the loop, withdraws the pending frame request and drops the
	/// callback.
	pub fn cancel(&self) {
		if self.cancelled.swap(true, Ordering::Relaxed) {
			return;
		}
		if let Ok(win) = window() {
			let _ = win.cancel_animation_frame(self.pending.load(Ordering::Relaxed));
		}
		let released = CALLBACKS.with_borrow_mut(|callbacks| callbacks.remove(&self.id));
		// Safe mid-frame: wasm-bindgen frees a running closure once it returns.
		if let Some(cell) = released {
			if let Ok(mut slot) = cell.try_borrow_mut() {
				slot.take();
			}
		}
	}
}
