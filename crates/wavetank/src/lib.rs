//! Wavetank: an interactive wave-physics tank for realtime displays.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Wavetank sub-crates. For most users, adding `wavetank` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wavetank::prelude::*;
//!
//! // A touch-only tank with the default palette and seed.
//! let mut sim = Simulator::new(TankConfig::default()).unwrap();
//!
//! // Tap the center of the tank, then let the ripple spread.
//! sim.touch(HEIGHT / 2, WIDTH / 2).unwrap();
//! sim.release();
//! for _ in 0..5 {
//!     sim.advance();
//! }
//!
//! assert_eq!(sim.tick(), TickId(5));
//! assert!(sim.field().u().iter().any(|&u| u != 0));
//! assert_eq!(sim.frame().len(), WIDTH * HEIGHT);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wavetank-core` | Tuned constants, materials, scene and palette enums |
//! | [`field`] | `wavetank-field` | Row-major grid storage and flat indexing |
//! | [`scenes`] | `wavetank-scenes` | Recipes for every demo scene |
//! | [`engine`] | `wavetank-engine` | Stepper, renderer, pointer input, realtime driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and tuned constants (`wavetank-core`).
///
/// Contains the cell [`types::Material`] taxonomy, the [`types::Mode`] and
/// [`types::Palette`] enums behind the two buttons, and the integer-physics
/// constants ([`types::MAX_RANGE`], the damping shifts, the grid size).
pub use wavetank_core as types;

/// Grid storage and indexing (`wavetank-field`).
///
/// Provides [`field::WaveField`], the row-major amplitude/velocity/material
/// grid every other crate operates on, plus the [`field::flat`] and
/// [`field::coords`] index helpers.
pub use wavetank_field as field;

/// Scene recipes (`wavetank-scenes`).
///
/// [`scenes::build`] populates a field for any [`types::Mode`], from random
/// point sources through mirrors, lenses, waveguides, and the maze.
pub use wavetank_scenes as scenes;

/// Stepping, rendering, and the realtime driver (`wavetank-engine`).
///
/// [`engine::Simulator`] for caller-driven ticking,
/// [`engine::RealtimeTank`] for autonomous background ticking.
pub use wavetank_engine as engine;

/// Common imports for typical Wavetank usage.
///
/// ```rust
/// use wavetank::prelude::*;
/// ```
///
/// This imports the most frequently used types: the simulator and realtime
/// driver, their configs and errors, the field grid, and the core enums.
pub mod prelude {
    // Core enums and constants
    pub use wavetank_core::{Band, Material, Mode, Palette, Polarity, TickId, HEIGHT, WIDTH};

    // Field storage
    pub use wavetank_field::{coords, flat, Padding, WaveField};

    // Scene construction
    pub use wavetank_scenes::build;

    // Simulator and realtime driver
    pub use wavetank_engine::{
        ConfigError, FrameSnapshot, InputError, PointerTrail, RealtimeTank, Simulator,
        SubmitError, TankCommand, TankConfig, TickMetrics,
    };
}
