//! Color palettes for rendering the amplitude field.
//!
//! Each palette assigns one channel mix to positive amplitudes and
//! another to negative ones. The actual channel arithmetic lives in the
//! engine's renderer; this enum is just the selection.

/// The six palette choices, in button-cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    /// Positive red, negative blue.
    RedBlue,
    /// Positive yellow, negative purple.
    YellowPurple,
    /// Positive red, negative green.
    RedGreen,
    /// Positive yellow, negative cyan.
    YellowCyan,
    /// Positive green, negative blue.
    BlueGreen,
    /// Positive cyan, negative purple.
    CyanPurple,
}

impl Palette {
    /// All palettes in cycle order.
    pub const ALL: [Palette; 6] = [
        Palette::RedBlue,
        Palette::YellowPurple,
        Palette::RedGreen,
        Palette::YellowCyan,
        Palette::BlueGreen,
        Palette::CyanPurple,
    ];

    /// Position of this palette in the cycle.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next palette, wrapping after [`Palette::CyanPurple`].
    #[must_use]
    pub fn next(self) -> Palette {
        Palette::ALL[(self.index() + 1) % Palette::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_order_matches_indices() {
        for (i, palette) in Palette::ALL.iter().enumerate() {
            assert_eq!(palette.index(), i);
        }
    }

    #[test]
    fn next_wraps_to_red_blue() {
        let mut p = Palette::RedBlue;
        for _ in 0..Palette::ALL.len() {
            p = p.next();
        }
        assert_eq!(p, Palette::RedBlue);
        assert_eq!(Palette::CyanPurple.next(), Palette::RedBlue);
    }
}
