//! Pointer strokes injected as velocity impulses.
//!
//! A pressed pointer stamps a fixed-magnitude velocity into every cell
//! between the previous and current samples, so fast drags leave an
//! unbroken line. The impulse polarity alternates on each release that
//! followed contact, letting a user "pump" standing waves.

use std::error::Error;
use std::fmt;

use smallvec::SmallVec;

use wavetank_core::{Polarity, HEIGHT, MAX_RANGE, WIDTH};
use wavetank_field::{flat, WaveField};

// ── InputError ─────────────────────────────────────────────────────

/// Errors from pointer sample injection.
#[derive(Debug, PartialEq, Eq)]
pub enum InputError {
    /// The sample lies outside the grid.
    OutOfBounds {
        /// Sampled row.
        row: usize,
        /// Sampled column.
        col: usize,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { row, col } => {
                write!(f, "touch sample ({row}, {col}) outside the {WIDTH}x{HEIGHT} grid")
            }
        }
    }
}

impl Error for InputError {}

// ── PointerTrail ───────────────────────────────────────────────────

/// Pointer contact state carried between samples.
///
/// The trail outlives scene rebuilds: switching modes mid-drag keeps
/// the stroke anchored where the pointer last was.
#[derive(Clone, Copy, Debug)]
pub struct PointerTrail {
    last: Option<(usize, usize)>,
    polarity: Polarity,
}

impl PointerTrail {
    /// A trail with no contact and positive polarity.
    pub fn new() -> PointerTrail {
        PointerTrail {
            last: None,
            polarity: Polarity::Positive,
        }
    }

    /// Whether the pointer is currently in contact.
    pub fn is_down(&self) -> bool {
        self.last.is_some()
    }

    /// Polarity the next impulse will carry.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Inject one pointer sample at `(row, col)`.
    ///
    /// Writes the impulse into every cell on the straight stroke from
    /// the previous sample, including both endpoints. The write goes to
    /// the velocity layer regardless of material; driven cells simply
    /// overwrite it on the next tick.
    pub fn touch(
        &mut self,
        field: &mut WaveField,
        row: usize,
        col: usize,
    ) -> Result<(), InputError> {
        if row >= HEIGHT || col >= WIDTH {
            return Err(InputError::OutOfBounds { row, col });
        }
        let impulse = (self.polarity.sign() * MAX_RANGE) >> 1;
        let anchor = self.last.unwrap_or((row, col));
        let v = field.v_mut();
        for (r, c) in stroke_cells((row, col), anchor) {
            v[flat(r, c)] = impulse;
        }
        self.last = Some((row, col));
        Ok(())
    }

    /// End the current contact.
    ///
    /// If the pointer had touched since the last release, the polarity
    /// flips for the next contact.
    pub fn release(&mut self) {
        if self.last.take().is_some() {
            self.polarity = self.polarity.flip();
        }
    }
}

impl Default for PointerTrail {
    fn default() -> Self {
        Self::new()
    }
}

/// Cells on the straight stroke from `from` back to `to`, endpoints
/// included.
///
/// Steps along the segment rounding each offset to the nearest cell.
/// The rounded overshoot past either endpoint is strictly under half a
/// cell, so every produced cell lies between the endpoints and
/// consecutive cells are 8-connected. A zero-length stroke yields the
/// single endpoint; without that case the step ratio would divide by
/// zero.
fn stroke_cells(from: (usize, usize), to: (usize, usize)) -> SmallVec<[(usize, usize); 32]> {
    let mut cells = SmallVec::new();
    let d_row = to.0 as f64 - from.0 as f64;
    let d_col = to.1 as f64 - from.1 as f64;
    let length = d_row.hypot(d_col);
    if length == 0.0 {
        cells.push(from);
        return cells;
    }
    for k in 0..=length.round() as u32 {
        let step = f64::from(k) / length;
        let row = from.0 as f64 + (d_row * step).round();
        let col = from.1 as f64 + (d_col * step).round();
        cells.push((row as usize, col as usize));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const POSITIVE_IMPULSE: i32 = 0x1FFF_FFFF;
    const NEGATIVE_IMPULSE: i32 = -0x2000_0000;

    #[test]
    fn first_touch_writes_a_single_impulse() {
        let mut field = WaveField::new();
        let mut trail = PointerTrail::new();
        trail.touch(&mut field, 10, 10).unwrap();

        assert!(trail.is_down());
        assert_eq!(field.velocity(10, 10), Some(POSITIVE_IMPULSE));
        assert_eq!(field.velocity(10, 11), Some(0));
        assert_eq!(field.velocity(11, 10), Some(0));
    }

    #[test]
    fn polarity_flips_on_release_after_contact() {
        let mut field = WaveField::new();
        let mut trail = PointerTrail::new();

        trail.touch(&mut field, 10, 10).unwrap();
        trail.release();
        assert_eq!(trail.polarity(), Polarity::Negative);

        trail.touch(&mut field, 20, 20).unwrap();
        assert_eq!(field.velocity(20, 20), Some(NEGATIVE_IMPULSE));

        trail.release();
        assert_eq!(trail.polarity(), Polarity::Positive);
    }

    #[test]
    fn release_without_contact_keeps_polarity() {
        let mut trail = PointerTrail::new();
        trail.release();
        trail.release();
        assert_eq!(trail.polarity(), Polarity::Positive);
    }

    #[test]
    fn drag_fills_the_cells_between_samples() {
        let mut field = WaveField::new();
        let mut trail = PointerTrail::new();
        trail.touch(&mut field, 10, 10).unwrap();
        trail.touch(&mut field, 10, 13).unwrap();

        for col in 10..=13 {
            assert_eq!(field.velocity(10, col), Some(POSITIVE_IMPULSE));
        }
        assert_eq!(field.velocity(10, 14), Some(0));
    }

    #[test]
    fn repeated_sample_at_the_same_cell_is_fine() {
        let mut field = WaveField::new();
        let mut trail = PointerTrail::new();
        trail.touch(&mut field, 5, 5).unwrap();
        trail.touch(&mut field, 5, 5).unwrap();
        assert_eq!(field.velocity(5, 5), Some(POSITIVE_IMPULSE));
    }

    #[test]
    fn diagonal_stroke_cell_sequence() {
        let cells = stroke_cells((3, 4), (0, 0));
        let expected: &[(usize, usize)] = &[(3, 4), (2, 3), (2, 2), (1, 2), (1, 1), (0, 0)];
        assert_eq!(cells.as_slice(), expected);
    }

    #[test]
    fn out_of_bounds_sample_is_rejected() {
        let mut field = WaveField::new();
        let mut trail = PointerTrail::new();
        match trail.touch(&mut field, HEIGHT, 5) {
            Err(InputError::OutOfBounds { row, col }) => {
                assert_eq!((row, col), (HEIGHT, 5));
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
        assert!(!trail.is_down());
        assert!(field.v().iter().all(|&v| v == 0));
    }

    #[test]
    fn rejected_sample_does_not_move_the_anchor() {
        let mut field = WaveField::new();
        let mut trail = PointerTrail::new();
        trail.touch(&mut field, 10, 10).unwrap();
        assert!(trail.touch(&mut field, 10, WIDTH).is_err());

        // The next valid sample still strokes from (10, 10).
        trail.touch(&mut field, 10, 12).unwrap();
        assert_eq!(field.velocity(10, 11), Some(POSITIVE_IMPULSE));
    }

    #[test]
    fn error_message_names_the_sample() {
        let err = InputError::OutOfBounds { row: 500, col: 3 };
        let msg = format!("{err}");
        assert!(msg.contains("(500, 3)"));
        assert!(msg.contains("320x170"));
    }

    proptest! {
        #[test]
        fn strokes_are_eight_connected_and_in_bounds(
            from_row in 0..HEIGHT, from_col in 0..WIDTH,
            to_row in 0..HEIGHT, to_col in 0..WIDTH,
        ) {
            let cells = stroke_cells((from_row, from_col), (to_row, to_col));
            prop_assert_eq!(cells[0], (from_row, from_col));
            prop_assert_eq!(*cells.last().unwrap(), (to_row, to_col));
            for pair in cells.windows(2) {
                let dr = pair[0].0.abs_diff(pair[1].0);
                let dc = pair[0].1.abs_diff(pair[1].1);
                prop_assert!(dr <= 1 && dc <= 1, "gap between {:?} and {:?}", pair[0], pair[1]);
            }
            for &(row, col) in &cells {
                prop_assert!(row < HEIGHT && col < WIDTH);
            }
        }
    }
}
