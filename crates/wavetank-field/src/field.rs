//! The wave field: three flat planes plus the border reset.

use wavetank_core::{Material, CELL_COUNT, HEIGHT, WIDTH};

/// Flat row-major index of a cell. Callers guarantee `row < HEIGHT` and
/// `col < WIDTH`; see [`flat_checked`] for the validating form.
#[inline]
pub const fn flat(row: usize, col: usize) -> usize {
    row * WIDTH + col
}

/// Flat index of a cell, or `None` if the coordinates are off the grid.
#[inline]
pub fn flat_checked(row: usize, col: usize) -> Option<usize> {
    if row < HEIGHT && col < WIDTH {
        Some(flat(row, col))
    } else {
        None
    }
}

/// `(row, col)` of a flat index. Callers guarantee `index < CELL_COUNT`.
#[inline]
pub const fn coords(index: usize) -> (usize, usize) {
    (index / WIDTH, index % WIDTH)
}

/// Absorbing border widths, in cells per edge, laid down by
/// [`WaveField::reset`]. The outermost one-cell wall ring is always
/// present and sits on top of whatever padding specifies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    /// Rows of absorbing cells below the top wall.
    pub top: usize,
    /// Columns of absorbing cells inside the right wall.
    pub right: usize,
    /// Rows of absorbing cells above the bottom wall.
    pub bottom: usize,
    /// Columns of absorbing cells inside the left wall.
    pub left: usize,
}

impl Padding {
    /// No absorbing border; only the wall ring.
    pub const NONE: Padding = Padding {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    /// The same width on all four edges.
    pub const fn uniform(cells: usize) -> Padding {
        Padding {
            top: cells,
            right: cells,
            bottom: cells,
            left: cells,
        }
    }
}

/// Simulation state for the full grid: amplitude `u`, velocity `v`, and
/// one [`Material`] per cell, each as a flat row-major plane.
#[derive(Clone, Debug)]
pub struct WaveField {
    u: Vec<i32>,
    v: Vec<i32>,
    material: Vec<Material>,
}

impl WaveField {
    /// A quiet field with only the wall ring.
    pub fn new() -> WaveField {
        let mut field = WaveField {
            u: vec![0; CELL_COUNT],
            v: vec![0; CELL_COUNT],
            material: vec![Material::Normal; CELL_COUNT],
        };
        field.reset(Padding::NONE);
        field
    }

    /// Zero both planes and lay down the border: material is Normal
    /// everywhere, Absorbing inside the padding bands, and Wall on the
    /// outermost ring (which wins over padding).
    pub fn reset(&mut self, padding: Padding) {
        for index in 0..CELL_COUNT {
            let (row, col) = coords(index);
            self.u[index] = 0;
            self.v[index] = 0;
            let in_padding = row <= padding.top
                || col <= padding.left
                || row.saturating_add(padding.bottom) >= HEIGHT - 1
                || col.saturating_add(padding.right) >= WIDTH - 1;
            let on_ring = row == 0 || col == 0 || row == HEIGHT - 1 || col == WIDTH - 1;
            self.material[index] = if on_ring {
                Material::Wall
            } else if in_padding {
                Material::Absorbing
            } else {
                Material::Normal
            };
        }
    }

    /// Number of cells in the field.
    #[inline]
    pub fn cell_count(&self) -> usize {
        CELL_COUNT
    }

    /// The amplitude plane.
    #[inline]
    pub fn u(&self) -> &[i32] {
        &self.u
    }

    /// Mutable amplitude plane.
    #[inline]
    pub fn u_mut(&mut self) -> &mut [i32] {
        &mut self.u
    }

    /// The velocity plane.
    #[inline]
    pub fn v(&self) -> &[i32] {
        &self.v
    }

    /// Mutable velocity plane.
    #[inline]
    pub fn v_mut(&mut self) -> &mut [i32] {
        &mut self.v
    }

    /// The material plane.
    #[inline]
    pub fn material(&self) -> &[Material] {
        &self.material
    }

    /// Mutable material plane.
    #[inline]
    pub fn material_mut(&mut self) -> &mut [Material] {
        &mut self.material
    }

    /// Split borrow used by the velocity pass: previous amplitudes are
    /// read while velocities are written.
    #[inline]
    pub fn split_velocity_update(&mut self) -> (&[i32], &mut [i32], &[Material]) {
        (&self.u, &mut self.v, &self.material)
    }

    /// Split borrow used by the amplitude pass.
    #[inline]
    pub fn split_amplitude_update(&mut self) -> (&mut [i32], &[i32], &[Material]) {
        (&mut self.u, &self.v, &self.material)
    }

    /// Amplitude at a cell, or `None` off the grid.
    pub fn amplitude(&self, row: usize, col: usize) -> Option<i32> {
        flat_checked(row, col).map(|i| self.u[i])
    }

    /// Velocity at a cell, or `None` off the grid.
    pub fn velocity(&self, row: usize, col: usize) -> Option<i32> {
        flat_checked(row, col).map(|i| self.v[i])
    }

    /// Material at a cell, or `None` off the grid.
    pub fn material_at(&self, row: usize, col: usize) -> Option<Material> {
        flat_checked(row, col).map(|i| self.material[i])
    }
}

impl Default for WaveField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_field_is_quiet_with_wall_ring() {
        let field = WaveField::new();
        assert!(field.u().iter().all(|&x| x == 0));
        assert!(field.v().iter().all(|&x| x == 0));
        for col in 0..WIDTH {
            assert_eq!(field.material_at(0, col), Some(Material::Wall));
            assert_eq!(field.material_at(HEIGHT - 1, col), Some(Material::Wall));
        }
        for row in 0..HEIGHT {
            assert_eq!(field.material_at(row, 0), Some(Material::Wall));
            assert_eq!(field.material_at(row, WIDTH - 1), Some(Material::Wall));
        }
        assert_eq!(field.material_at(1, 1), Some(Material::Normal));
        assert_eq!(
            field.material_at(HEIGHT / 2, WIDTH / 2),
            Some(Material::Normal)
        );
    }

    #[test]
    fn reset_clears_state() {
        let mut field = WaveField::new();
        field.u_mut()[flat(10, 10)] = 999;
        field.v_mut()[flat(10, 10)] = -999;
        field.material_mut()[flat(10, 10)] = Material::Glass;
        field.reset(Padding::NONE);
        assert_eq!(field.amplitude(10, 10), Some(0));
        assert_eq!(field.velocity(10, 10), Some(0));
        assert_eq!(field.material_at(10, 10), Some(Material::Normal));
    }

    #[test]
    fn uniform_padding_marks_absorbing_bands() {
        let mut field = WaveField::new();
        field.reset(Padding::uniform(15));
        // Just inside the ring: absorbing.
        assert_eq!(field.material_at(1, 1), Some(Material::Absorbing));
        assert_eq!(field.material_at(15, 100), Some(Material::Absorbing));
        assert_eq!(field.material_at(100, 15), Some(Material::Absorbing));
        assert_eq!(
            field.material_at(HEIGHT - 16, 100),
            Some(Material::Absorbing)
        );
        assert_eq!(
            field.material_at(100, WIDTH - 16),
            Some(Material::Absorbing)
        );
        // First row/col past the band: normal.
        assert_eq!(field.material_at(16, 100), Some(Material::Normal));
        assert_eq!(field.material_at(100, 16), Some(Material::Normal));
        assert_eq!(field.material_at(HEIGHT - 17, 100), Some(Material::Normal));
        assert_eq!(field.material_at(100, WIDTH - 17), Some(Material::Normal));
        // The ring itself is still wall.
        assert_eq!(field.material_at(0, 100), Some(Material::Wall));
    }

    #[test]
    fn asymmetric_padding_follows_each_edge() {
        let mut field = WaveField::new();
        field.reset(Padding {
            top: 40,
            right: 0,
            bottom: 0,
            left: 0,
        });
        assert_eq!(field.material_at(40, 100), Some(Material::Absorbing));
        assert_eq!(field.material_at(41, 100), Some(Material::Normal));
        assert_eq!(field.material_at(HEIGHT - 2, 100), Some(Material::Normal));
    }

    #[test]
    fn checked_lookups_reject_out_of_grid() {
        let field = WaveField::new();
        assert_eq!(flat_checked(HEIGHT, 0), None);
        assert_eq!(flat_checked(0, WIDTH), None);
        assert_eq!(field.amplitude(HEIGHT, 0), None);
        assert_eq!(field.material_at(0, WIDTH), None);
    }

    proptest! {
        #[test]
        fn flat_and_coords_round_trip(row in 0..HEIGHT, col in 0..WIDTH) {
            let index = flat(row, col);
            prop_assert!(index < CELL_COUNT);
            prop_assert_eq!(coords(index), (row, col));
            prop_assert_eq!(flat_checked(row, col), Some(index));
        }

        #[test]
        fn reset_classifies_every_cell(
            top in 0usize..60,
            right in 0usize..60,
            bottom in 0usize..60,
            left in 0usize..60,
        ) {
            let mut field = WaveField::new();
            let padding = Padding { top, right, bottom, left };
            field.reset(padding);
            for index in 0..field.cell_count() {
                let (row, col) = coords(index);
                let on_ring =
                    row == 0 || col == 0 || row == HEIGHT - 1 || col == WIDTH - 1;
                let in_padding = row <= top
                    || col <= left
                    || row + bottom >= HEIGHT - 1
                    || col + right >= WIDTH - 1;
                let expected = if on_ring {
                    Material::Wall
                } else if in_padding {
                    Material::Absorbing
                } else {
                    Material::Normal
                };
                prop_assert_eq!(field.material()[index], expected);
            }
        }
    }
}
