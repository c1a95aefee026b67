//! Ambient particle background.
//!
//! Paints a field of slowly drifting points on a full-viewport canvas:
//! - Density proportional to viewport width, reseeded on resize
//! - Short-lived sparks spawned at the pointer
//! - Pointer attraction that brightens and pulls nearby particles
//!
//! The pointer is shared through a [`PointerChannel`] rather than the
//! document's style sheet, so the input handler and the frame loop never
//! reference each other directly.

mod component;
mod frame_loop;
pub mod particles;
pub mod pointer;
mod render;

pub use component::ParticleCanvas;
pub use frame_loop::FrameLoop;
pub use pointer::{PointerChannel, PointerPercent};
