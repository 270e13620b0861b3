//! Cell material taxonomy.
//!
//! Every cell carries exactly one [`Material`]. The wave equation applies
//! only to the three wave media (normal, absorbing, glass); walls are
//! inert, and the source variants force their amplitude each tick instead
//! of integrating it.

use crate::params::{HEAVY_DAMPING_SHIFT, LIGHT_DAMPING_SHIFT, RADIANS_PER_TICK};

/// Frequency band of a point source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    /// Half the mid rate: 0.05 radians per tick.
    Low,
    /// The base rate: 0.1 radians per tick.
    Mid,
    /// Double the mid rate: 0.2 radians per tick.
    High,
}

impl Band {
    /// Phase advance per tick, in radians.
    #[inline]
    pub fn phase_rate(self) -> f64 {
        match self {
            Band::Low => 0.5 * RADIANS_PER_TICK,
            Band::Mid => RADIANS_PER_TICK,
            Band::High => 2.0 * RADIANS_PER_TICK,
        }
    }
}

/// Sign of an emission or stroke impulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Emits the band amplitude as computed.
    Positive,
    /// Emits the negated band amplitude.
    Negative,
}

impl Polarity {
    /// `+1` or `-1`.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
        }
    }

    /// The opposite polarity.
    #[must_use]
    #[inline]
    pub fn flip(self) -> Polarity {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
        }
    }
}

/// What a cell is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Material {
    /// Ordinary wave medium with light damping.
    Normal,
    /// Wave medium with heavy damping; soaks up incoming energy.
    Absorbing,
    /// Wave medium with half the wave speed (index of refraction 2).
    Glass,
    /// Inert: amplitude and velocity stay at zero.
    Wall,
    /// Point source emitting a band sinusoid with the given polarity.
    Source {
        /// Frequency band.
        band: Band,
        /// Emission sign.
        polarity: Polarity,
    },
    /// Member of a phased line array; phase depends on the cell's
    /// flat index, steering the emitted beam.
    PhasedArray,
}

impl Material {
    /// Whether the velocity pass updates this cell.
    #[inline]
    pub fn is_wave_medium(self) -> bool {
        matches!(
            self,
            Material::Normal | Material::Absorbing | Material::Glass
        )
    }

    /// Damping shift applied to this cell's velocity each tick.
    /// Only meaningful for wave media; walls and sources never damp.
    #[inline]
    pub fn damping_shift(self) -> u32 {
        match self {
            Material::Absorbing => HEAVY_DAMPING_SHIFT,
            _ => LIGHT_DAMPING_SHIFT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_rates_are_octaves_of_mid() {
        assert_eq!(Band::Low.phase_rate(), 0.05);
        assert_eq!(Band::Mid.phase_rate(), 0.1);
        assert_eq!(Band::High.phase_rate(), 0.2);
    }

    #[test]
    fn polarity_sign_and_flip() {
        assert_eq!(Polarity::Positive.sign(), 1);
        assert_eq!(Polarity::Negative.sign(), -1);
        assert_eq!(Polarity::Positive.flip(), Polarity::Negative);
        assert_eq!(Polarity::Negative.flip().flip(), Polarity::Negative);
    }

    #[test]
    fn wave_media_classification() {
        assert!(Material::Normal.is_wave_medium());
        assert!(Material::Absorbing.is_wave_medium());
        assert!(Material::Glass.is_wave_medium());
        assert!(!Material::Wall.is_wave_medium());
        assert!(!Material::PhasedArray.is_wave_medium());
        assert!(!Material::Source {
            band: Band::Mid,
            polarity: Polarity::Positive
        }
        .is_wave_medium());
    }

    #[test]
    fn only_absorbing_damps_heavily() {
        assert_eq!(Material::Absorbing.damping_shift(), 5);
        assert_eq!(Material::Normal.damping_shift(), 12);
        assert_eq!(Material::Glass.damping_shift(), 12);
    }
}
