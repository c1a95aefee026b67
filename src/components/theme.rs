//! Visual configuration shared by the page components.
//!
//! Provides an RGBA color type and the tunables of the particle field.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const BLACK: Color = Color::rgb(0, 0, 0);
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Functional `rgb()` notation, ignoring alpha.
	pub fn to_css_rgb_fn(self) -> String {
		format!("rgb({}, {}, {})", self.r, self.g, self.b)
	}
}

/// Tunables of the ambient particle field.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Particle color (alpha is replaced per particle)
	pub color: Color,
	/// One regular particle per this many pixels of surface width
	pub density_px: f64,
	/// Hard cap on the particle collection; oldest entries are dropped
	pub max_particles: usize,
	/// Regular particle radius range
	pub size_min: f64,
	pub size_max: f64,
	/// Regular particle speed, per axis, in `[-speed/2, speed/2)`
	pub speed: f64,
	/// Regular particle opacity range
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Chance per frame of spawning a temporary particle at the pointer
	pub spawn_chance: f64,
	/// Temporary particles appear within `±spawn_jitter / 2` of the pointer
	pub spawn_jitter: f64,
	pub spawn_size_min: f64,
	pub spawn_size_max: f64,
	pub spawn_speed: f64,
	pub spawn_opacity: f64,
	/// Life lost per frame by a temporary particle
	pub life_decay: f64,
	/// Pointer attraction radius
	pub attraction_radius: f64,
	/// Pull factor applied as `delta * pull * intensity`
	pub attraction_pull: f64,
	/// Extra opacity at full intensity
	pub attraction_glow: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			color: Color::WHITE,
			density_px: 15.0,
			max_particles: 800,
			size_min: 0.5,
			size_max: 2.0,
			speed: 0.5,
			opacity_min: 0.2,
			opacity_max: 0.7,
			spawn_chance: 0.4,
			spawn_jitter: 20.0,
			spawn_size_min: 0.5,
			spawn_size_max: 2.5,
			spawn_speed: 2.0,
			spawn_opacity: 0.8,
			life_decay: 0.01,
			attraction_radius: 200.0,
			attraction_pull: 0.02,
			attraction_glow: 0.8,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(
			Color::rgb(1, 2, 3).with_alpha(0.5).to_css(),
			"rgba(1, 2, 3, 0.5)"
		);
	}

	#[test]
	fn lerp_black_to_white_clamps() {
		assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.0), Color::BLACK);
		assert_eq!(Color::BLACK.lerp(Color::WHITE, 1.0), Color::WHITE);
		assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
		assert_eq!(Color::rgb(127, 127, 127).to_css_rgb_fn(), "rgb(127, 127, 127)");
	}
}
