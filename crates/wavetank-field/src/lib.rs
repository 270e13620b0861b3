//! Grid storage for the Wavetank simulator.
//!
//! [`WaveField`] holds the amplitude, velocity, and material planes as
//! flat row-major arrays over the fixed 320 x 170 grid, plus the reset
//! operation that lays down the wall ring and absorbing border.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;

pub use field::{coords, flat, flat_checked, Padding, WaveField};
