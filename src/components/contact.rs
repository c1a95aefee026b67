//! Contact links with copy-to-clipboard feedback.

use std::time::Duration;

use js_sys::{Function, Promise, Reflect};
use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};

use super::types::Contact;
use crate::error::{PageError, PageResult, window};

/// How long the "copied" tooltip stays up.
pub const TOOLTIP_DURATION: Duration = Duration::from_millis(2000);

/// Which contact detail was copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
	Email,
	Phone,
}

/// Visibility of the per-detail "copied" tooltips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactTooltips {
	pub email: bool,
	pub phone: bool,
}

impl ContactTooltips {
	pub fn set(&mut self, kind: ContactKind, visible: bool) {
		match kind {
			ContactKind::Email => self.email = visible,
			ContactKind::Phone => self.phone = visible,
		}
	}

	pub fn get(&self, kind: ContactKind) -> bool {
		match kind {
			ContactKind::Email => self.email,
			ContactKind::Phone => self.phone,
		}
	}
}

/// Writes `text` through `navigator.clipboard.writeText`.
async fn write_clipboard(text: &str) -> PageResult<()> {
	let navigator: JsValue = window()?.navigator().into();
	let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
	if clipboard.is_undefined() || clipboard.is_null() {
		return Err(PageError::ClipboardUnavailable);
	}
	let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
		.dyn_into::<Function>()
		.map_err(|_| PageError::ClipboardUnavailable)?;
	let promise: Promise = write_text
		.call1(&clipboard, &JsValue::from_str(text))?
		.dyn_into()
		.map_err(|_| PageError::ClipboardUnavailable)?;
	JsFuture::from(promise).await?;
	Ok(())
}

/// Copies `text` and flashes the tooltip for `kind`.
///
/// On failure the error is logged and the tooltips are left untouched.
pub fn copy_to_clipboard(text: String, kind: ContactKind, tooltips: RwSignal<ContactTooltips>) {
	spawn_local(async move {
		match write_clipboard(&text).await {
			Ok(()) => {
				info!("folio-stage: copied {kind:?} to clipboard");
				flash_tooltip(kind, tooltips);
			}
			Err(err) => error!("folio-stage: failed to copy text: {err}"),
		}
	});
}

/// Shows the tooltip for `kind` now and hides it after [`TOOLTIP_DURATION`].
pub fn flash_tooltip(kind: ContactKind, tooltips: RwSignal<ContactTooltips>) {
	tooltips.update(|t| t.set(kind, true));
	set_timeout(
		move || tooltips.update(|t| t.set(kind, false)),
		TOOLTIP_DURATION,
	);
}

/// Email and phone buttons that copy their value on click.
#[component]
pub fn ContactLinks(contact: Contact) -> impl IntoView {
	let tooltips = RwSignal::new(ContactTooltips::default());
	let entries = [
		(ContactKind::Email, contact.email),
		(ContactKind::Phone, contact.phone),
	];

	let buttons = entries
		.into_iter()
		.map(|(kind, value)| {
			let label = value.clone();
			view! {
				<button
					class="contact-item"
					on:click=move |_| copy_to_clipboard(value.clone(), kind, tooltips)
				>
					<span class="contact-value">{label}</span>
					<span class="copy-tooltip" class:visible=move || tooltips.with(|t| t.get(kind))>
						"Copied!"
					</span>
				</button>
			}
		})
		.collect_view();

	view! { <div class="contact-links">{buttons}</div> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tooltips_are_independent() {
		let mut tooltips = ContactTooltips::default();
		tooltips.set(ContactKind::Email, true);
		assert!(tooltips.get(ContactKind::Email));
		assert!(!tooltips.get(ContactKind::Phone));
		tooltips.set(ContactKind::Phone, true);
		tooltips.set(ContactKind::Email, false);
		assert_eq!(
			tooltips,
			ContactTooltips {
				email: false,
				phone: true
			}
		);
	}

	#[test]
	fn tooltip_lasts_two_seconds() {
		assert_eq!(TOOLTIP_DURATION.as_millis(), 2000);
	}
}
