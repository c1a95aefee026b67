//! Error type for the browser glue.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures raised while talking to browser APIs.
///
/// None of these are fatal: callers log them and skip the affected update.
#[derive(Debug, Error)]
pub enum PageError {
	#[error("no global window")]
	NoWindow,
	#[error("window has no document")]
	NoDocument,
	#[error("canvas has no 2d rendering context")]
	NoCanvasContext,
	#[error("clipboard API unavailable")]
	ClipboardUnavailable,
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for PageError {
	fn from(value: JsValue) -> Self {
		PageError::Js(
			value
				.as_string()
				.unwrap_or_else(|| format!("{value:?}")),
		)
	}
}

/// Convenience alias for browser-facing results.
pub type PageResult<T> = Result<T, PageError>;

/// Returns the global window or [`PageError::NoWindow`].
pub fn window() -> PageResult<web_sys::Window> {
	web_sys::window().ok_or(PageError::NoWindow)
}

/// Current viewport size in CSS pixels.
pub fn viewport_size(window: &web_sys::Window) -> PageResult<(f64, f64)> {
	let width = window.inner_width()?.as_f64().ok_or(PageError::NoWindow)?;
	let height = window.inner_height()?.as_f64().ok_or(PageError::NoWindow)?;
	Ok((width, height))
}
