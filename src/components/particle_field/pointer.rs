//! Pointer position shared between the input handlers and the frame loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Pointer position as percentages of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPercent {
	pub x: f64,
	pub y: f64,
}

impl Default for PointerPercent {
	fn default() -> Self {
		Self { x: 50.0, y: 50.0 }
	}
}

impl PointerPercent {
	/// Maps a client-space pointer to the damped percentage range `40..=60`.
	pub fn from_client(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Self {
		let offset = |pos: f64, extent: f64| {
			if extent > 0.0 {
				(pos / extent - 0.5) * 20.0
			} else {
				0.0
			}
		};
		Self {
			x: 50.0 + offset(client_x, viewport_w),
			y: 50.0 + offset(client_y, viewport_h),
		}
	}

	/// Position on a surface of the given size.
	pub fn to_surface(self, width: f64, height: f64) -> (f64, f64) {
		(self.x / 100.0 * width, self.y / 100.0 * height)
	}
}

/// Single-writer, single-reader pointer cell.
///
/// Both coordinates are stored as `f64` bit patterns. A reader may observe an
/// `x` from one write and a `y` from the next, which is harmless for a
/// per-frame visual effect.
#[derive(Clone, Debug)]
pub struct PointerChannel {
	x: Arc<AtomicU64>,
	y: Arc<AtomicU64>,
}

impl Default for PointerChannel {
	fn default() -> Self {
		let start = PointerPercent::default();
		Self {
			x: Arc::new(AtomicU64::new(start.x.to_bits())),
			y: Arc::new(AtomicU64::new(start.y.to_bits())),
		}
	}
}

impl PointerChannel {
	/// Channel starting at the viewport centre.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores the latest pointer position for the next frame.
	pub fn publish(&self, pos: PointerPercent) {
		self.x.store(pos.x.to_bits(), Ordering::Relaxed);
		self.y.store(pos.y.to_bits(), Ordering::Relaxed);
	}

	/// Most recently published position.
	pub fn read(&self) -> PointerPercent {
		PointerPercent {
			x: f64::from_bits(self.x.load(Ordering::Relaxed)),
			y: f64::from_bits(self.y.load(Ordering::Relaxed)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_viewport_centre() {
		let channel = PointerChannel::new();
		assert_eq!(channel.read(), PointerPercent { x: 50.0, y: 50.0 });
		assert_eq!(channel.read().to_surface(800.0, 600.0), (400.0, 300.0));
	}

	#[test]
	fn clones_share_the_same_cell() {
		let writer = PointerChannel::new();
		let reader = writer.clone();
		writer.publish(PointerPercent { x: 42.0, y: 58.5 });
		assert_eq!(reader.read(), PointerPercent { x: 42.0, y: 58.5 });
	}

	#[test]
	fn client_position_is_damped_to_twenty_percent_band() {
		let left_top = PointerPercent::from_client(0.0, 0.0, 1000.0, 500.0);
		assert_eq!(left_top, PointerPercent { x: 40.0, y: 40.0 });
		let right_bottom = PointerPercent::from_client(1000.0, 500.0, 1000.0, 500.0);
		assert_eq!(right_bottom, PointerPercent { x: 60.0, y: 60.0 });
		let degenerate = PointerPercent::from_client(10.0, 10.0, 0.0, 0.0);
		assert_eq!(degenerate, PointerPercent::default());
	}
}
