//! Page components.

pub mod carousel;
pub mod choreography;
pub mod contact;
pub mod particle_field;
pub mod theme;
pub mod types;
