//! Ambient particle field with pointer attraction and spark trails.

use rand::Rng;

use super::super::theme::FieldStyle;

/// Whether a particle lives forever or burns out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleKind {
	/// Wraps around the surface edges indefinitely.
	Regular,
	/// Spawned at the pointer; `life` falls from 1.0 to 0.0.
	Temporary { life: f64 },
}

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub opacity: f64,
	pub kind: ParticleKind,
	/// Opacity to paint with this frame, after the pointer glow.
	pub display_alpha: f64,
}

impl Particle {
	pub fn is_temporary(&self) -> bool {
		matches!(self.kind, ParticleKind::Temporary { .. })
	}

	/// Radius to paint with; sparks shrink as they burn out.
	pub fn radius(&self) -> f64 {
		match self.kind {
			ParticleKind::Regular => self.size,
			ParticleKind::Temporary { life } => self.size * life,
		}
	}
}

/// Uniform sample in `[min, max)`.
fn sample<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
	min + rng.random::<f64>() * (max - min)
}

/// Uniform sample centred on zero with total width `spread`.
fn centred<R: Rng + ?Sized>(rng: &mut R, spread: f64) -> f64 {
	(rng.random::<f64>() - 0.5) * spread
}

/// Owns the particle collection and advances it once per frame.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	style: FieldStyle,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Seeds one regular particle per `density_px` of surface width.
	pub fn new<R: Rng + ?Sized>(style: FieldStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			style,
			width,
			height,
		};
		field.reset(width, height, rng);
		field
	}

	/// Surface width the field wraps at.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height the field wraps at.
	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn style(&self) -> &FieldStyle {
		&self.style
	}

	/// Drops every particle and reseeds for a new surface size.
	pub fn reset<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width;
		self.height = height;

		let count = (width / self.style.density_px).floor().max(0.0) as usize;
		let style = &self.style;
		self.particles = (0..count)
			.map(|_| {
				let opacity = sample(rng, style.opacity_min, style.opacity_max);
				Particle {
					x: rng.random::<f64>() * width,
					y: rng.random::<f64>() * height,
					size: sample(rng, style.size_min, style.size_max),
					speed_x: centred(rng, style.speed),
					speed_y: centred(rng, style.speed),
					opacity,
					kind: ParticleKind::Regular,
					display_alpha: opacity,
				}
			})
			.collect();
	}

	/// Advances the field by one frame with the pointer at `(px, py)` in
	/// surface coordinates.
	pub fn tick<R: Rng + ?Sized>(&mut self, px: f64, py: f64, rng: &mut R) {
		if rng.random::<f64>() < self.style.spawn_chance {
			self.spawn_spark(px, py, rng);
		}

		let max = self.style.max_particles;
		if self.particles.len() > max {
			let excess = self.particles.len() - max;
			self.particles.drain(..excess);
		}

		let (width, height) = (self.width, self.height);
		let style = &self.style;
		self.particles.retain_mut(|p| {
			p.x += p.speed_x;
			p.y += p.speed_y;

			match &mut p.kind {
				ParticleKind::Temporary { life } => {
					*life -= style.life_decay;
					if *life <= 0.0 {
						return false;
					}
					p.opacity = *life * style.spawn_opacity;
				}
				ParticleKind::Regular => {
					if p.x < 0.0 {
						p.x = width;
					} else if p.x > width {
						p.x = 0.0;
					}
					if p.y < 0.0 {
						p.y = height;
					} else if p.y > height {
						p.y = 0.0;
					}
				}
			}

			let (dx, dy) = (px - p.x, py - p.y);
			let distance = (dx * dx + dy * dy).sqrt();
			p.display_alpha = p.opacity;
			if distance < style.attraction_radius {
				let intensity = 1.0 - distance / style.attraction_radius;
				p.display_alpha = (p.opacity + intensity * style.attraction_glow).min(1.0);
				p.x += dx * style.attraction_pull * intensity;
				p.y += dy * style.attraction_pull * intensity;
			}
			true
		});
	}

	fn spawn_spark<R: Rng + ?Sized>(&mut self, px: f64, py: f64, rng: &mut R) {
		let style = &self.style;
		let spark = Particle {
			x: px + centred(rng, style.spawn_jitter),
			y: py + centred(rng, style.spawn_jitter),
			size: sample(rng, style.spawn_size_min, style.spawn_size_max),
			speed_x: centred(rng, style.spawn_speed),
			speed_y: centred(rng, style.spawn_speed),
			opacity: style.spawn_opacity,
			kind: ParticleKind::Temporary { life: 1.0 },
			display_alpha: style.spawn_opacity,
		};
		self.particles.push(spark);
	}
}
