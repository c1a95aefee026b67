//! Inline style patches.

use web_sys::HtmlElement;

use crate::error::PageResult;

/// Formats a CSS number with at most four decimals and no negative zero.
pub fn num(value: f64) -> String {
	if value.abs() < 5e-5 {
		return "0".to_string();
	}
	let text = format!("{value:.4}");
	let text = text.trim_end_matches('0').trim_end_matches('.');
	text.to_string()
}

/// `{value}px`
pub fn px(value: f64) -> String {
	format!("{}px", num(value))
}

/// An ordered list of inline style declarations for one element.
///
/// Setting the same property twice keeps only the last value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePatch {
	props: Vec<(&'static str, String)>,
}

impl StylePatch {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
		let value = value.into();
		match self.props.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.props.push((name, value)),
		}
		self
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.props
			.iter()
			.find(|(n, _)| *n == name)
			.map(|(_, v)| v.as_str())
	}

	pub fn is_empty(&self) -> bool {
		self.props.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.props.iter().map(|(n, v)| (*n, v.as_str()))
	}

	/// Writes every declaration onto the element's inline style.
	pub fn apply(&self, element: &HtmlElement) -> PageResult<()> {
		let style = element.style();
		for (name, value) in self.iter() {
			style.set_property(name, value)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numbers_are_trimmed() {
		assert_eq!(num(20.0), "20");
		assert_eq!(num(0.15000000000000002), "0.15");
		assert_eq!(num(-0.0), "0");
		assert_eq!(num(-150.0), "-150");
		assert_eq!(num(0.33333), "0.3333");
		assert_eq!(px(-12.5), "-12.5px");
	}

	#[test]
	fn later_values_replace_earlier_ones() {
		let patch = StylePatch::new()
			.set("opacity", "1")
			.set("transform", "scale(1)")
			.set("opacity", "0.5");
		assert_eq!(patch.get("opacity"), Some("0.5"));
		let names: Vec<_> = patch.iter().map(|(n, _)| n).collect();
		assert_eq!(names, vec!["opacity", "transform"]);
	}
}
