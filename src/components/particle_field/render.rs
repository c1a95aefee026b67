//! Canvas painting for the particle field.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;

/// Clears the surface and paints every particle as a filled circle.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	let color = field.style().color;
	for p in &field.particles {
		let radius = p.radius();
		if radius <= 0.0 {
			continue;
		}
		ctx.set_fill_style_str(&color.with_alpha(p.display_alpha).to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}
