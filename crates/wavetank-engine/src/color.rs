//! Amplitude-to-pixel mapping.
//!
//! Pixels are RGB565. Each cell's amplitude collapses to a 6-bit
//! magnitude, which expands into fixed red, green, and blue channel
//! words; the palette picks one channel mix for positive amplitudes
//! and another for negative ones. Absorbing and glass cells get a
//! constant tint OR-ed on top so their extent stays visible at rest.

use wavetank_core::{Material, Palette};
use wavetank_field::WaveField;

/// Pixel for wall cells, a dim gray.
const WALL_PIXEL: u16 = 0x842;

/// Tint OR-ed over absorbing cells: the low bit of each channel.
const ABSORBING_TINT: u16 = 0x421;

/// Tint OR-ed over glass cells: the low red bit.
const GLASS_TINT: u16 = 0x800;

/// Channel words for one amplitude: (red, green, blue).
///
/// The magnitude keeps the top 6 bits of the clipped amplitude, so the
/// brightness ramp covers the full drive range.
fn channels(u: i32) -> (u16, u16, u16) {
    let mag = (u.unsigned_abs() >> 23).min(63) as u16;
    let red = (mag & 0xf8) << 2;
    let green = mag >> 3;
    let blue = (mag & 0xfc) << 7;
    (red, green, blue)
}

/// Mix the channel words for one amplitude under the given palette.
fn mix(palette: Palette, u: i32) -> u16 {
    let (red, green, blue) = channels(u);
    let positive = u >= 0;
    match palette {
        Palette::RedBlue => {
            if positive {
                red
            } else {
                blue
            }
        }
        Palette::YellowPurple => {
            if positive {
                red | green
            } else {
                red | blue
            }
        }
        Palette::RedGreen => {
            if positive {
                red
            } else {
                green
            }
        }
        Palette::YellowCyan => {
            if positive {
                red | green
            } else {
                green | blue
            }
        }
        Palette::BlueGreen => {
            if positive {
                green
            } else {
                blue
            }
        }
        Palette::CyanPurple => {
            if positive {
                green | blue
            } else {
                red | blue
            }
        }
    }
}

/// Render the field into `frame`, one RGB565 pixel per cell in row-major
/// order. `frame` must hold [`CELL_COUNT`](wavetank_core::CELL_COUNT)
/// pixels.
pub fn render(field: &WaveField, palette: Palette, frame: &mut [u16]) {
    let cells = field.u().iter().zip(field.material());
    for (pixel, (&u, &material)) in frame.iter_mut().zip(cells) {
        *pixel = match material {
            Material::Wall => WALL_PIXEL,
            Material::Absorbing => mix(palette, u) | ABSORBING_TINT,
            Material::Glass => mix(palette, u) | GLASS_TINT,
            _ => mix(palette, u),
        };
    }
}
