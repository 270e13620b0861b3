//! Glass layouts: a slab, a prism, and a biconvex lens.

use wavetank_core::{Band, Material, Polarity, HEIGHT, WIDTH};
use wavetank_field::{flat, WaveField};

use crate::{CENTER_COL, CENTER_ROW};

/// A vertical glass slab crossed by an oblique mid-band beam.
pub fn slab(field: &mut WaveField) {
    let material = field.material_mut();
    for row in 25..HEIGHT - 25 {
        for col in CENTER_COL - 30..=CENTER_COL + 30 {
            material[flat(row, col)] = Material::Glass;
        }
        if row > 100 {
            material[flat(row, row - 17)] = Material::Source {
                band: Band::Mid,
                polarity: Polarity::Positive,
            };
        }
    }
}

/// A glass triangle widening toward the bottom, lit by an oblique beam.
pub fn prism(field: &mut WaveField) {
    let material = field.material_mut();
    for row in 20..150 {
        let half_width = (row - 20) * 75 / 130;
        for col in CENTER_COL - half_width..=CENTER_COL + half_width {
            material[flat(row, col)] = Material::Glass;
        }
    }
    for row in 131..HEIGHT - 20 {
        material[flat(row, row - 70)] = Material::Source {
            band: Band::Mid,
            polarity: Polarity::Positive,
        };
    }
}

/// Squared radius of the two circles whose intersection forms the lens.
const LENS_RADIUS_SQUARED: i32 = 67_600;

/// A biconvex lens: the intersection of two circles whose centers sit
/// well off the left and right edges, fed by a planar wavefront from the
/// west edge.
pub fn lens(field: &mut WaveField) {
    let left_focus: i32 = -140;
    let right_focus: i32 = WIDTH as i32 + 40;
    let material = field.material_mut();
    for row in 21..HEIGHT - 21 {
        material[flat(row, 0)] = Material::Source {
            band: Band::High,
            polarity: Polarity::Positive,
        };
        let dy = CENTER_ROW as i32 - row as i32;
        for col in 22..WIDTH - 21 {
            let dl = left_focus - col as i32;
            let dr = right_focus - col as i32;
            if dy * dy + dl * dl < LENS_RADIUS_SQUARED && dy * dy + dr * dr < LENS_RADIUS_SQUARED {
                material[flat(row, col)] = Material::Glass;
            }
        }
    }
}
