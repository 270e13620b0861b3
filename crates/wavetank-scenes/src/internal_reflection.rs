//! Glass-boundary layouts: partial and total internal reflection, and
//! three fiber-optic cables.

use wavetank_core::{Band, Material, Polarity, HEIGHT, WIDTH};
use wavetank_field::{flat, WaveField};

use crate::CENTER_ROW;

/// Fill the lower half with glass and launch a beam along a diagonal of
/// sources; everything left of the beam becomes absorbing so only the
/// wavefront that reaches the glass surface matters.
fn glass_floor_with_beam(field: &mut WaveField, offset_for: fn(usize) -> usize) {
    let material = field.material_mut();
    for row in CENTER_ROW..HEIGHT - 20 {
        for col in 1..WIDTH - 18 {
            material[flat(row, col)] = Material::Glass;
        }
        if row > 100 {
            let offset = offset_for(row);
            material[flat(row, offset)] = Material::Source {
                band: Band::Mid,
                polarity: Polarity::Positive,
            };
            for col in 1..offset {
                material[flat(row, col)] = Material::Absorbing;
            }
        }
    }
}

/// A steep beam inside the glass: most energy escapes upward, some
/// reflects off the surface.
pub fn partial(field: &mut WaveField) {
    glass_floor_with_beam(field, |row| (row - 100) << 1);
}

/// A shallow beam inside the glass, past the critical angle: the surface
/// reflects essentially everything.
pub fn total(field: &mut WaveField) {
    glass_floor_with_beam(field, |row| (row - 100) >> 1);
}

/// Three horizontal glass fibers of different core widths, each fed from
/// the west edge by its own band.
pub fn fiber_optic(field: &mut WaveField) {
    let cables: [(usize, usize, usize, Band); 3] = [
        (40, 15, 13, Band::Low),
        (CENTER_ROW + 25, 8, 6, Band::Mid),
        (HEIGHT - 20, 4, 3, Band::High),
    ];
    let material = field.material_mut();
    for (center, glass_half, feed_half, band) in cables {
        for row in center - glass_half..=center + glass_half {
            for col in 2..WIDTH - 41 {
                material[flat(row, col)] = Material::Glass;
            }
        }
        for row in center - feed_half..=center + feed_half {
            material[flat(row, 1)] = Material::Source {
                band,
                polarity: Polarity::Positive,
            };
        }
    }
}
