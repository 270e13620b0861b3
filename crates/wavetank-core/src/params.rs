//! Grid dimensions and the tuned constants of the integer wave physics.
//!
//! Every constant here was calibrated against the reference hardware and
//! must not be adjusted independently: the damping shifts, the amplitude
//! range, and the per-tick phase rates together set the visual wavelength
//! (~16 px half wavelength at the mid band) and the decay behavior.

/// Grid width in cells.
pub const WIDTH: usize = 320;

/// Grid height in cells.
pub const HEIGHT: usize = 170;

/// Total number of cells in the field.
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// Lower amplitude/velocity bound. Half the i32 range, leaving headroom
/// so the sum of any two clipped values still fits in i32.
pub const MIN_RANGE: i32 = -0x4000_0000;

/// Upper amplitude/velocity bound.
pub const MAX_RANGE: i32 = 0x3FFF_FFFF;

/// Damping shift for normal and glass cells: `vel -= vel >> 12` each tick.
pub const LIGHT_DAMPING_SHIFT: u32 = 12;

/// Damping shift for absorbing cells: `vel -= vel >> 5` each tick.
pub const HEAVY_DAMPING_SHIFT: u32 = 5;

/// Velocity shift applied inside glass during amplitude integration.
/// Dividing by 4 halves the wave speed, giving an index of refraction of 2.
pub const GLASS_REFRACTION_SHIFT: u32 = 2;

/// Phase advance per tick for the mid frequency band, in radians.
/// The low band runs at half this rate, the high band at double.
pub const RADIANS_PER_TICK: f64 = 0.1;

/// Spatial phase advance per flat cell index for phased-array sources.
pub const RADIANS_PER_CELL: f64 = 0.15;

/// Clamp a wide intermediate into `[MIN_RANGE, MAX_RANGE]`.
///
/// Total over all of i64 and idempotent: `clip(clip(x) as i64) == clip(x)`.
/// The velocity update sums three clipped terms, which can exceed i32, so
/// callers widen to i64 first and narrow through this clamp.
#[inline]
pub fn clip(x: i64) -> i32 {
    x.clamp(MIN_RANGE as i64, MAX_RANGE as i64) as i32
}
