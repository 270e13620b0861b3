//! Point-source layouts: random scatters, multifrequency scatters, and
//! the monopole/dipole/quadrupole arrangements.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use wavetank_core::{Band, Material, Polarity, HEIGHT, WIDTH};
use wavetank_field::{flat, WaveField};

use crate::{CENTER_COL, CENTER_ROW};

/// Margin keeping random sources away from the border.
const SCATTER_MARGIN: usize = 30;

fn scatter_cell(rng: &mut ChaCha8Rng) -> usize {
    let row = rng.random_range(SCATTER_MARGIN..HEIGHT - SCATTER_MARGIN);
    let col = rng.random_range(SCATTER_MARGIN..WIDTH - SCATTER_MARGIN);
    flat(row, col)
}

/// Six mid-band sources at random cells, polarity alternating per draw
/// (even draws negative, odd positive). Colliding draws keep the last.
pub fn random_points(field: &mut WaveField, rng: &mut ChaCha8Rng) {
    for point in 0..6 {
        let polarity = if point % 2 == 1 {
            Polarity::Positive
        } else {
            Polarity::Negative
        };
        field.material_mut()[scatter_cell(rng)] = Material::Source {
            band: Band::Mid,
            polarity,
        };
    }
}

/// One random source per band and polarity, drawn in the order
/// mid+, mid-, high+, high-, low+, low-.
pub fn multifrequency(field: &mut WaveField, rng: &mut ChaCha8Rng) {
    let kinds = [
        (Band::Mid, Polarity::Positive),
        (Band::Mid, Polarity::Negative),
        (Band::High, Polarity::Positive),
        (Band::High, Polarity::Negative),
        (Band::Low, Polarity::Positive),
        (Band::Low, Polarity::Negative),
    ];
    for (band, polarity) in kinds {
        field.material_mut()[scatter_cell(rng)] = Material::Source { band, polarity };
    }
}

/// A single mid-band source at the grid center.
pub fn monopole(field: &mut WaveField) {
    field.material_mut()[flat(CENTER_ROW, CENTER_COL)] = Material::Source {
        band: Band::Mid,
        polarity: Polarity::Positive,
    };
}

/// Opposite-polarity sources 10 cells either side of center.
pub fn dipole(field: &mut WaveField) {
    let material = field.material_mut();
    material[flat(CENTER_ROW, CENTER_COL - 10)] = Material::Source {
        band: Band::Mid,
        polarity: Polarity::Negative,
    };
    material[flat(CENTER_ROW, CENTER_COL + 10)] = Material::Source {
        band: Band::Mid,
        polarity: Polarity::Positive,
    };
}

/// Four sources on a 20-cell square, polarity matching across diagonals.
pub fn quadrupole(field: &mut WaveField) {
    let material = field.material_mut();
    let positive = Material::Source {
        band: Band::Mid,
        polarity: Polarity::Positive,
    };
    let negative = Material::Source {
        band: Band::Mid,
        polarity: Polarity::Negative,
    };
    material[flat(CENTER_ROW - 10, CENTER_COL - 10)] = positive;
    material[flat(CENTER_ROW + 10, CENTER_COL - 10)] = negative;
    material[flat(CENTER_ROW + 10, CENTER_COL + 10)] = positive;
    material[flat(CENTER_ROW - 10, CENTER_COL + 10)] = negative;
}
