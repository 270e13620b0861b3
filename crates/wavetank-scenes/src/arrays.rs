//! Driven-aperture layouts: a phase-swept line array and two slit
//! patterns radiating from the south edge.

use wavetank_core::{Band, Material, Polarity, HEIGHT, WIDTH};
use wavetank_field::{flat, WaveField};

use crate::{CENTER_COL, CENTER_ROW};

/// A horizontal line of phase-swept emitters through the middle of the
/// tank. Each cell's drive phase depends on its flat index, which
/// steers the combined beam.
pub fn phased_array(field: &mut WaveField) {
    let material = field.material_mut();
    for col in CENTER_COL - 100..CENTER_COL + 100 {
        material[flat(CENTER_ROW, col)] = Material::PhasedArray;
    }
}

/// Two in-phase source segments on the south edge, an aperture pair
/// radiating upward into open water.
pub fn double_slit(field: &mut WaveField) {
    let material = field.material_mut();
    for col in 0..WIDTH {
        let wall = (col > 150 && col < 170) || col < 130 || col > 190;
        material[flat(HEIGHT - 1, col)] = if wall {
            Material::Wall
        } else {
            Material::Source {
                band: Band::Mid,
                polarity: Polarity::Positive,
            }
        };
    }
}

/// A periodic comb of narrow high-band emitters along the south edge.
pub fn diffraction_grating(field: &mut WaveField) {
    let material = field.material_mut();
    for col in 1..WIDTH - 1 {
        if col > 110 && col < 210 && (col % 20 < 5 || col % 20 > 15) {
            material[flat(HEIGHT - 1, col)] = Material::Source {
                band: Band::High,
                polarity: Polarity::Positive,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phased_array_spans_the_center_row() {
        let mut field = WaveField::new();
        phased_array(&mut field);
        assert_eq!(field.material_at(85, 60), Some(Material::PhasedArray));
        assert_eq!(field.material_at(85, 259), Some(Material::PhasedArray));
        assert_eq!(field.material_at(85, 59), Some(Material::Normal));
        assert_eq!(field.material_at(85, 260), Some(Material::Normal));
        assert_eq!(field.material_at(84, 160), Some(Material::Normal));
    }

    #[test]
    fn double_slit_leaves_two_source_segments() {
        let mut field = WaveField::new();
        double_slit(&mut field);
        let source = Material::Source {
            band: Band::Mid,
            polarity: Polarity::Positive,
        };
        assert_eq!(field.material_at(169, 130), Some(source));
        assert_eq!(field.material_at(169, 150), Some(source));
        assert_eq!(field.material_at(169, 170), Some(source));
        assert_eq!(field.material_at(169, 190), Some(source));
        // The pier between the segments and both shores are wall.
        assert_eq!(field.material_at(169, 151), Some(Material::Wall));
        assert_eq!(field.material_at(169, 169), Some(Material::Wall));
        assert_eq!(field.material_at(169, 129), Some(Material::Wall));
        assert_eq!(field.material_at(169, 191), Some(Material::Wall));
        assert_eq!(field.material_at(169, 0), Some(Material::Wall));
        // No absorbing band along the bottom, so the segments radiate
        // straight into open water.
        assert_eq!(field.material_at(168, 160), Some(Material::Normal));
    }

    #[test]
    fn grating_emitters_repeat_every_twenty_columns() {
        let mut field = WaveField::new();
        diffraction_grating(&mut field);
        let source = Material::Source {
            band: Band::High,
            polarity: Polarity::Positive,
        };
        assert_eq!(field.material_at(169, 116), Some(source));
        assert_eq!(field.material_at(169, 120), Some(source));
        assert_eq!(field.material_at(169, 124), Some(source));
        assert_eq!(field.material_at(169, 204), Some(source));
        assert_eq!(field.material_at(169, 115), Some(Material::Wall));
        assert_eq!(field.material_at(169, 125), Some(Material::Wall));
        assert_eq!(field.material_at(169, 110), Some(Material::Wall));
        assert_eq!(field.material_at(169, 209), Some(Material::Wall));
        assert_eq!(field.material_at(169, 210), Some(Material::Wall));
    }
}
