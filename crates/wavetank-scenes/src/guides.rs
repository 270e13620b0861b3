//! Channelled layouts: crossing beams, a waveguide, and a wall maze.

use wavetank_core::{Band, Material, Polarity, HEIGHT, WIDTH};
use wavetank_field::{flat, WaveField};

use crate::{CENTER_COL, CENTER_ROW};

/// Two beams entering through channels cut in the absorbing border, a
/// low band from the west and a high band from the north, crossing in
/// open water.
pub fn superposition(field: &mut WaveField) {
    let material = field.material_mut();
    // West channel: wall rails at rows 60 and 100, low-band feed between.
    for col in 1..30 {
        material[flat(60, col)] = Material::Wall;
        material[flat(100, col)] = Material::Wall;
    }
    for row in 61..100 {
        material[flat(row, 1)] = Material::Source {
            band: Band::Low,
            polarity: Polarity::Positive,
        };
        for col in 2..=30 {
            material[flat(row, col)] = Material::Normal;
        }
    }
    // North channel: wall rails at columns 100 and 110, high-band feed.
    for row in 1..30 {
        material[flat(row, 100)] = Material::Wall;
        material[flat(row, 110)] = Material::Wall;
    }
    for col in 101..110 {
        material[flat(1, col)] = Material::Source {
            band: Band::High,
            polarity: Polarity::Positive,
        };
        for row in 2..=30 {
            material[flat(row, col)] = Material::Normal;
        }
    }
}

/// A wide channel between two wall rails spanning the west half, driven
/// by a column of mid-band sources whose polarity flips at the center
/// row.
pub fn waveguide(field: &mut WaveField) {
    let material = field.material_mut();
    for col in 1..CENTER_COL {
        material[flat(CENTER_ROW - 25, col)] = Material::Wall;
        material[flat(CENTER_ROW + 25, col)] = Material::Wall;
    }
    for row in CENTER_ROW - 24..CENTER_ROW + 24 {
        let polarity = if row > CENTER_ROW {
            Polarity::Positive
        } else {
            Polarity::Negative
        };
        material[flat(row, 1)] = Material::Source {
            band: Band::Mid,
            polarity,
        };
        for col in 2..=15 {
            material[flat(row, col)] = Material::Normal;
        }
    }
}

/// Horizontal wall bars with alternating gaps; a mid-band feed at the
/// top-left corner has to snake through them.
pub fn maze(field: &mut WaveField) {
    let bar_spacing = HEIGHT / 5;
    let material = field.material_mut();
    let mut anchored_west = true;
    let mut row = bar_spacing;
    while row < HEIGHT {
        let cols = if anchored_west {
            0..WIDTH - bar_spacing
        } else {
            bar_spacing..WIDTH
        };
        for col in cols {
            material[flat(row, col)] = Material::Wall;
        }
        anchored_west = !anchored_west;
        row += bar_spacing;
    }
    for row in 1..bar_spacing - 1 {
        material[flat(row, 1)] = Material::Source {
            band: Band::Mid,
            polarity: Polarity::Positive,
        };
    }
}
