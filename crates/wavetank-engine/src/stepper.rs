//! The two-pass integer update that advances the wave field one tick.
//!
//! Pass 1 integrates velocity from the discrete Laplacian of the
//! amplitude field and applies per-material damping. Pass 2 integrates
//! amplitude from velocity and forces driven cells to their per-tick
//! drive value. All arithmetic widens to i64 and narrows through
//! [`clip`], so no intermediate can wrap.
//!
//! Pass 1 visits interior cells only. Scene recipes never place a wave
//! medium on the outer ring, so every cell it updates has four
//! in-bounds neighbors and the unchecked reads below cannot leave the
//! grid.

use wavetank_core::{
    clip, Band, Material, TickId, CELL_COUNT, GLASS_REFRACTION_SHIFT, HEIGHT, MAX_RANGE,
    RADIANS_PER_CELL, RADIANS_PER_TICK, WIDTH,
};
use wavetank_field::{flat, WaveField};

/// Peak drive level for sources, half the clip range.
const DRIVE_AMPLITUDE: f64 = (MAX_RANGE >> 1) as f64;

// ── Source drive levels ────────────────────────────────────────────

/// The three band drive levels for one tick.
///
/// Every source of a given band holds the same amplitude within a tick,
/// so the three sines are evaluated once per tick rather than per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceAmplitudes {
    /// Drive level for [`Band::Low`].
    pub low: i32,
    /// Drive level for [`Band::Mid`].
    pub mid: i32,
    /// Drive level for [`Band::High`].
    pub high: i32,
}

impl SourceAmplitudes {
    /// Evaluate the three band sines at the given tick.
    pub fn at(tick: TickId) -> SourceAmplitudes {
        let t = tick.0 as f64;
        SourceAmplitudes {
            low: drive(Band::Low.phase_rate() * t),
            mid: drive(Band::Mid.phase_rate() * t),
            high: drive(Band::High.phase_rate() * t),
        }
    }

    /// The drive level for one band.
    pub fn for_band(&self, band: Band) -> i32 {
        match band {
            Band::Low => self.low,
            Band::Mid => self.mid,
            Band::High => self.high,
        }
    }
}

/// Sine drive truncated to i32, matching the display pipeline's
/// truncation rather than rounding.
fn drive(phase: f64) -> i32 {
    (DRIVE_AMPLITUDE * phase.sin()) as i32
}

/// Per-cell drive for phased-array emitters. The flat index term sweeps
/// the phase along the array, steering the combined wavefront.
fn phased_drive(tick: TickId, index: usize) -> i32 {
    let phase = 0.5 * (RADIANS_PER_TICK * tick.0 as f64 - RADIANS_PER_CELL * index as f64);
    (DRIVE_AMPLITUDE * phase.sin()) as i32
}

// ── Field update ───────────────────────────────────────────────────

/// Advance the field by one tick.
///
/// The tick value feeds the source drive sines; the caller increments
/// it between calls.
pub fn advance(field: &mut WaveField, tick: TickId) {
    let drives = SourceAmplitudes::at(tick);
    update_velocity(field);
    update_amplitude(field, tick, &drives);
}

/// Pass 1: velocity integration over the interior.
///
/// `vel = v + uxx/2 + uyy/2`, then `vel -= vel >> damping_shift`. The
/// three-term sum of clipped values can exceed i32, so the sum runs in
/// i64 and narrows through [`clip`].
fn update_velocity(field: &mut WaveField) {
    let (u, v, material) = field.split_velocity_update();
    for row in 1..HEIGHT - 1 {
        for col in 1..WIDTH - 1 {
            let at = flat(row, col);
            if !material[at].is_wave_medium() {
                continue;
            }
            let center = i64::from(u[at]);
            let uxx = ((i64::from(u[at - 1]) + i64::from(u[at + 1])) >> 1) - center;
            let uyy = ((i64::from(u[at - WIDTH]) + i64::from(u[at + WIDTH])) >> 1) - center;
            let mut vel = i64::from(v[at]) + (uxx >> 1) + (uyy >> 1);
            vel -= vel >> material[at].damping_shift();
            v[at] = clip(vel);
        }
    }
}

/// Pass 2: amplitude integration over every cell.
///
/// Wave media accumulate their velocity (glass at a quarter rate, which
/// halves the wave speed). Driven cells are forced to their drive value
/// outright, so they overwrite anything the pointer or a neighbor left
/// behind. Walls never change.
fn update_amplitude(field: &mut WaveField, tick: TickId, drives: &SourceAmplitudes) {
    let (u, v, material) = field.split_amplitude_update();
    for at in 0..CELL_COUNT {
        match material[at] {
            Material::Normal | Material::Absorbing => {
                u[at] = clip(i64::from(u[at]) + i64::from(v[at]));
            }
            Material::Glass => {
                u[at] = clip(i64::from(u[at]) + i64::from(v[at] >> GLASS_REFRACTION_SHIFT));
            }
            Material::Wall => {}
            Material::Source { band, polarity } => {
                u[at] = polarity.sign() * drives.for_band(band);
            }
            Material::PhasedArray => {
                u[at] = phased_drive(tick, at);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wavetank_core::{Polarity, MIN_RANGE};

    const R: usize = HEIGHT / 2;
    const C: usize = WIDTH / 2;

    #[test]
    fn quiescent_field_stays_quiescent() {
        let mut field = WaveField::new();
        for t in 0..5 {
            advance(&mut field, TickId(t));
        }
        assert!(field.u().iter().all(|&u| u == 0));
        assert!(field.v().iter().all(|&v| v == 0));
    }

    #[test]
    fn amplitude_spike_spreads_to_the_four_neighbors() {
        let mut field = WaveField::new();
        field.u_mut()[flat(R, C)] = 1 << 20;
        advance(&mut field, TickId(0));

        // Each orthogonal neighbor picks up half the averaged spike,
        // minus one damping step: (1<<18) - ((1<<18) >> 12).
        let spread = 262_080;
        for (row, col) in [(R - 1, C), (R + 1, C), (R, C - 1), (R, C + 1)] {
            assert_eq!(field.velocity(row, col), Some(spread));
            assert_eq!(field.amplitude(row, col), Some(spread));
        }
        // Diagonals see no amplitude gradient yet.
        assert_eq!(field.velocity(R - 1, C - 1), Some(0));
        assert_eq!(field.velocity(R + 1, C + 1), Some(0));
        // The spike itself rebounds: vel = -(1<<20) damped, then added
        // back onto the original amplitude.
        assert_eq!(field.velocity(R, C), Some(-1_048_320));
        assert_eq!(field.amplitude(R, C), Some(256));
    }

    #[test]
    fn absorbing_damps_thirty_two_times_harder() {
        let mut field = WaveField::new();
        field.material_mut()[flat(R, C + 10)] = Material::Absorbing;
        field.v_mut()[flat(R, C)] = 1 << 20;
        field.v_mut()[flat(R, C + 10)] = 1 << 20;
        advance(&mut field, TickId(0));

        assert_eq!(field.velocity(R, C), Some(1_048_320)); // - (v >> 12)
        assert_eq!(field.velocity(R, C + 10), Some(1_015_808)); // - (v >> 5)
    }

    #[test]
    fn glass_integrates_a_quarter_of_velocity() {
        let mut field = WaveField::new();
        field.material_mut()[flat(R, C)] = Material::Glass;
        field.v_mut()[flat(R, C)] = 1024;
        advance(&mut field, TickId(0));
        assert_eq!(field.velocity(R, C), Some(1024)); // 1024 >> 12 == 0
        assert_eq!(field.amplitude(R, C), Some(256));
    }

    #[test]
    fn negative_velocities_shift_arithmetically() {
        let mut field = WaveField::new();
        field.material_mut()[flat(R, C)] = Material::Glass;
        field.v_mut()[flat(R, C)] = -1024;
        advance(&mut field, TickId(0));
        // -1024 >> 12 == -1, so damping nudges toward zero by one.
        assert_eq!(field.velocity(R, C), Some(-1023));
        assert_eq!(field.amplitude(R, C), Some(-256));
    }

    #[test]
    fn walls_never_change() {
        let mut field = WaveField::new();
        field.material_mut()[flat(R, C)] = Material::Wall;
        field.u_mut()[flat(R, C)] = 7;
        field.v_mut()[flat(R, C)] = 9;
        for t in 0..3 {
            advance(&mut field, TickId(t));
        }
        assert_eq!(field.amplitude(R, C), Some(7));
        assert_eq!(field.velocity(R, C), Some(9));
    }

    #[test]
    fn sources_track_the_band_sines() {
        let mut field = WaveField::new();
        field.material_mut()[flat(R, C)] = Material::Source {
            band: Band::Mid,
            polarity: Polarity::Positive,
        };
        field.material_mut()[flat(R, C + 2)] = Material::Source {
            band: Band::Mid,
            polarity: Polarity::Negative,
        };
        field.material_mut()[flat(R, C + 4)] = Material::Source {
            band: Band::High,
            polarity: Polarity::Positive,
        };
        advance(&mut field, TickId(3));

        let mid = (DRIVE_AMPLITUDE * (0.1_f64 * 3.0).sin()) as i32;
        let high = (DRIVE_AMPLITUDE * (0.2_f64 * 3.0).sin()) as i32;
        assert_eq!(field.amplitude(R, C), Some(mid));
        assert_eq!(field.amplitude(R, C + 2), Some(-mid));
        assert_eq!(field.amplitude(R, C + 4), Some(high));
    }

    #[test]
    fn sources_are_silent_at_tick_zero() {
        let amps = SourceAmplitudes::at(TickId(0));
        assert_eq!(amps.low, 0);
        assert_eq!(amps.mid, 0);
        assert_eq!(amps.high, 0);
    }

    #[test]
    fn band_rates_are_octaves_of_the_mid_rate() {
        let amps = SourceAmplitudes::at(TickId(10));
        assert_eq!(amps.low, (DRIVE_AMPLITUDE * 0.5_f64.sin()) as i32);
        assert_eq!(amps.mid, (DRIVE_AMPLITUDE * 1.0_f64.sin()) as i32);
        assert_eq!(amps.high, (DRIVE_AMPLITUDE * 2.0_f64.sin()) as i32);
    }

    #[test]
    fn phased_cells_sweep_phase_by_flat_index() {
        let mut field = WaveField::new();
        field.material_mut()[flat(R, C)] = Material::PhasedArray;
        advance(&mut field, TickId(7));

        let index = flat(R, C) as f64;
        let phase = 0.5 * (RADIANS_PER_TICK * 7.0 - RADIANS_PER_CELL * index);
        let expected = (DRIVE_AMPLITUDE * phase.sin()) as i32;
        assert_eq!(field.amplitude(R, C), Some(expected));
    }

    #[test]
    fn saturated_field_stays_in_range() {
        let mut field = WaveField::new();
        for at in 0..CELL_COUNT {
            if field.material()[at].is_wave_medium() {
                field.u_mut()[at] = MAX_RANGE;
                field.v_mut()[at] = MAX_RANGE;
            }
        }
        for t in 0..3 {
            advance(&mut field, TickId(t));
        }
        assert!(field.u().iter().all(|&u| (MIN_RANGE..=MAX_RANGE).contains(&u)));
        assert!(field.v().iter().all(|&v| (MIN_RANGE..=MAX_RANGE).contains(&v)));
    }

    proptest! {
        #[test]
        fn one_step_stays_in_range(
            center_u in MIN_RANGE..=MAX_RANGE,
            center_v in MIN_RANGE..=MAX_RANGE,
            ring in proptest::array::uniform8(MIN_RANGE..=MAX_RANGE),
        ) {
            let mut field = WaveField::new();
            let mut k = 0;
            for dr in -1i32..=1 {
                for dc in -1i32..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let at = flat((R as i32 + dr) as usize, (C as i32 + dc) as usize);
                    field.u_mut()[at] = ring[k];
                    k += 1;
                }
            }
            field.u_mut()[flat(R, C)] = center_u;
            field.v_mut()[flat(R, C)] = center_v;
            advance(&mut field, TickId(1));

            let u = field.amplitude(R, C).unwrap();
            let v = field.velocity(R, C).unwrap();
            prop_assert!((MIN_RANGE..=MAX_RANGE).contains(&u));
            prop_assert!((MIN_RANGE..=MAX_RANGE).contains(&v));
        }

        #[test]
        fn identical_fields_advance_identically(seed_u in MIN_RANGE..=MAX_RANGE) {
            let mut a = WaveField::new();
            let mut b = WaveField::new();
            a.u_mut()[flat(R, C)] = seed_u;
            b.u_mut()[flat(R, C)] = seed_u;
            for t in 0..4 {
                advance(&mut a, TickId(t));
                advance(&mut b, TickId(t));
            }
            prop_assert_eq!(a.u(), b.u());
            prop_assert_eq!(a.v(), b.v());
        }
    }
}
