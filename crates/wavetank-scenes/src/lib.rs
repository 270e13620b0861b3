//! Scene recipes for the Wavetank simulator.
//!
//! Each [`Mode`](wavetank_core::Mode) maps to one layout: a border reset
//! followed by material writes. Layouts with random placement draw from a
//! seeded ChaCha8 RNG, so identical seeds reproduce identical scenes.
//!
//! The absorbing variants of the point-source scenes are the same recipe
//! inside a uniform 15-cell absorbing border.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use wavetank_core::{Mode, HEIGHT, WIDTH};
use wavetank_field::{Padding, WaveField};

pub mod arrays;
pub mod guides;
pub mod internal_reflection;
pub mod mirrors;
pub mod point_sources;
pub mod refraction;

pub(crate) const CENTER_ROW: usize = HEIGHT / 2;
pub(crate) const CENTER_COL: usize = WIDTH / 2;

/// Width of the absorbing border used by the absorbing scene variants.
const ABSORBING_BORDER: usize = 15;

/// Absorbing border laid down before each scene's material writes.
pub fn border_padding(mode: Mode) -> Padding {
    match mode {
        Mode::TouchOnly
        | Mode::RandomPoints
        | Mode::Multifrequency
        | Mode::Monopole
        | Mode::Dipole
        | Mode::Quadrupole
        | Mode::EllipticMirror
        | Mode::Maze => Padding::NONE,
        Mode::RandomPointsAbsorbing
        | Mode::MultifrequencyAbsorbing
        | Mode::MonopoleAbsorbing
        | Mode::DipoleAbsorbing
        | Mode::QuadrupoleAbsorbing
        | Mode::Waveguide
        | Mode::PhasedArray => Padding::uniform(ABSORBING_BORDER),
        Mode::Superposition => Padding::uniform(30),
        Mode::FlatMirror => Padding {
            top: 25,
            right: 25,
            bottom: 25,
            left: 0,
        },
        Mode::ParabolicMirror => Padding {
            top: 40,
            right: 0,
            bottom: 0,
            left: 0,
        },
        Mode::Refraction | Mode::Prism | Mode::TotalInternalReflection => Padding::uniform(20),
        Mode::Lens => Padding {
            top: 20,
            right: 30,
            bottom: 20,
            left: 30,
        },
        Mode::PartialInternalReflection => Padding {
            top: 20,
            right: 20,
            bottom: 20,
            left: 10,
        },
        Mode::FiberOptic => Padding {
            top: 0,
            right: 40,
            bottom: 0,
            left: 10,
        },
        Mode::DoubleSlit => Padding {
            top: 20,
            right: 20,
            bottom: 0,
            left: 20,
        },
        Mode::DiffractionGrating => Padding {
            top: 25,
            right: 20,
            bottom: 0,
            left: 20,
        },
    }
}

/// Reset the field and lay out the given scene.
///
/// `seed` only matters for the random-placement modes; vary it per rebuild
/// to re-roll their layouts.
pub fn build(mode: Mode, field: &mut WaveField, seed: u64) {
    field.reset(border_padding(mode));
    match mode {
        Mode::TouchOnly => {}
        Mode::RandomPoints | Mode::RandomPointsAbsorbing => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            point_sources::random_points(field, &mut rng);
        }
        Mode::Multifrequency | Mode::MultifrequencyAbsorbing => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            point_sources::multifrequency(field, &mut rng);
        }
        Mode::Monopole | Mode::MonopoleAbsorbing => point_sources::monopole(field),
        Mode::Dipole | Mode::DipoleAbsorbing => point_sources::dipole(field),
        Mode::Quadrupole | Mode::QuadrupoleAbsorbing => point_sources::quadrupole(field),
        Mode::Superposition => guides::superposition(field),
        Mode::FlatMirror => mirrors::flat_mirror(field),
        Mode::ParabolicMirror => mirrors::parabolic_mirror(field),
        Mode::EllipticMirror => mirrors::elliptic_mirror(field),
        Mode::Refraction => refraction::slab(field),
        Mode::Prism => refraction::prism(field),
        Mode::Lens => refraction::lens(field),
        Mode::PartialInternalReflection => internal_reflection::partial(field),
        Mode::TotalInternalReflection => internal_reflection::total(field),
        Mode::FiberOptic => internal_reflection::fiber_optic(field),
        Mode::Waveguide => guides::waveguide(field),
        Mode::PhasedArray => arrays::phased_array(field),
        Mode::DoubleSlit => arrays::double_slit(field),
        Mode::DiffractionGrating => arrays::diffraction_grating(field),
        Mode::Maze => guides::maze(field),
    }
}
