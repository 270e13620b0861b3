//! Core types and tuned constants for the Wavetank simulator.
//!
//! This is the leaf crate with no dependencies. It defines the shared
//! vocabulary used throughout the workspace: the integer-physics
//! constants, the cell material taxonomy, scene modes, color palettes,
//! and the tick counter newtype.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod material;
pub mod mode;
pub mod palette;
pub mod params;

pub use id::TickId;
pub use material::{Band, Material, Polarity};
pub use mode::Mode;
pub use palette::Palette;
pub use params::{
    clip, CELL_COUNT, GLASS_REFRACTION_SHIFT, HEAVY_DAMPING_SHIFT, HEIGHT, LIGHT_DAMPING_SHIFT,
    MAX_RANGE, MIN_RANGE, RADIANS_PER_CELL, RADIANS_PER_TICK, WIDTH,
};
