//! Mirror layouts: a flat diagonal, a parabola, and an ellipse.

use wavetank_core::{Band, Material, Polarity, HEIGHT, WIDTH};
use wavetank_field::{coords, flat, flat_checked, WaveField};

use crate::{CENTER_COL, CENTER_ROW};

/// A column of mid-band sources on the west edge facing a diagonal wall.
pub fn flat_mirror(field: &mut WaveField) {
    let material = field.material_mut();
    for row in 25..HEIGHT - 25 {
        material[flat(row, 1)] = Material::Source {
            band: Band::Mid,
            polarity: Polarity::Positive,
        };
    }
    for row in 50..HEIGHT - 50 {
        material[flat(row, row * 3 / 2)] = Material::Wall;
    }
}

/// A parabola opening toward the top edge, illuminated by a row of
/// high-band sources along that edge. The curve y = j^2 / 150 is drawn
/// upward from the bottom; apex offsets with y = 0 have no grid row below
/// row 169 and are skipped, as is the single right-arm cell that lands on
/// column 320.
pub fn parabolic_mirror(field: &mut WaveField) {
    let material = field.material_mut();
    for j in 0..=CENTER_COL {
        let y = (j * j) / 150;
        if y == 0 {
            continue;
        }
        let row = HEIGHT - y;
        material[flat(row, CENTER_COL - j)] = Material::Wall;
        if let Some(index) = flat_checked(row, CENTER_COL + j) {
            material[index] = Material::Wall;
        }
    }
    for col in 10..WIDTH - 10 {
        material[flat(0, col)] = Material::Source {
            band: Band::High,
            polarity: Polarity::Positive,
        };
    }
}

/// Wall thickness window for the ellipse hull, in implicit-equation units.
const ELLIPSE_SHELL: i32 = 10_000_000;

/// An elliptical wall with semi-axes spanning the grid and a high-band
/// source at the left focus region.
pub fn elliptic_mirror(field: &mut WaveField) {
    let a = CENTER_COL as i32;
    let b = CENTER_ROW as i32;
    let material = field.material_mut();
    for index in 0..material.len() {
        let (row, col) = coords(index);
        let x = col as i32 - a;
        let y = row as i32 - b;
        let range_factor = (x * x * b * b) + (a * a * y * y) - (a * a * b * b);
        if (0..ELLIPSE_SHELL).contains(&range_factor) {
            material[index] = Material::Wall;
        }
    }
    material[flat(CENTER_ROW, 25)] = Material::Source {
        band: Band::High,
        polarity: Polarity::Positive,
    };
}
