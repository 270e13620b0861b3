//! Benchmark profiles and utilities for the Wavetank simulator.
//!
//! Provides pre-built fields for benchmarking:
//!
//! - [`scene_field`]: a freshly built scene for any mode
//! - [`stirred_field`]: a scene advanced until waves fill the tank

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wavetank_core::{Mode, TickId};
use wavetank_field::WaveField;

/// The seed every benchmark builds its scenes from.
pub const BENCH_SEED: u64 = 42;

/// Build the field for `mode` with the fixed benchmark seed.
pub fn scene_field(mode: Mode) -> WaveField {
    let mut field = WaveField::new();
    wavetank_scenes::build(mode, &mut field, BENCH_SEED);
    field
}

/// Build the field for `mode` and advance it `ticks` times, so steppers
/// and renderers see realistic nonzero amplitudes instead of a cold
/// all-zero grid.
pub fn stirred_field(mode: Mode, ticks: u64) -> WaveField {
    let mut field = scene_field(mode);
    for t in 0..ticks {
        wavetank_engine::stepper::advance(&mut field, TickId(t));
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_fields_are_deterministic() {
        let a = scene_field(Mode::RandomPoints);
        let b = scene_field(Mode::RandomPoints);
        assert_eq!(a.material(), b.material());
    }

    #[test]
    fn stirred_fields_carry_amplitude() {
        let field = stirred_field(Mode::DoubleSlit, 50);
        assert!(field.u().iter().any(|&u| u != 0));
    }
}
