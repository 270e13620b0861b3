//! Scene modes.
//!
//! A mode names one prepared demonstration layout. The order here is the
//! cycling order of the mode button and is load-bearing for saved seeds:
//! reordering variants changes which layout a given index denotes.

/// The 26 demonstration scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Empty field; waves come only from pointer strokes.
    TouchOnly,
    /// Six mid-band point sources at random positions.
    RandomPoints,
    /// Random points inside an absorbing border.
    RandomPointsAbsorbing,
    /// Six random sources, one per band and polarity.
    Multifrequency,
    /// Multifrequency points inside an absorbing border.
    MultifrequencyAbsorbing,
    /// A single source at the grid center.
    Monopole,
    /// Monopole inside an absorbing border.
    MonopoleAbsorbing,
    /// Two opposite-polarity sources 10 cells either side of center.
    Dipole,
    /// Dipole inside an absorbing border.
    DipoleAbsorbing,
    /// Four alternating sources on a 20-cell square.
    Quadrupole,
    /// Quadrupole inside an absorbing border.
    QuadrupoleAbsorbing,
    /// Two perpendicular waveguides feeding crossing beams.
    Superposition,
    /// A diagonal wall reflecting a planar wavefront.
    FlatMirror,
    /// A parabola focusing a planar wavefront from the top edge.
    ParabolicMirror,
    /// An elliptical wall with a source at one focus.
    EllipticMirror,
    /// A glass slab bending an oblique beam.
    Refraction,
    /// A glass triangle splitting an oblique beam.
    Prism,
    /// A biconvex glass lens focusing a planar wavefront.
    Lens,
    /// A beam meeting a glass boundary below the critical angle.
    PartialInternalReflection,
    /// A beam meeting a glass boundary beyond the critical angle.
    TotalInternalReflection,
    /// Three glass fibers of different widths carrying separate bands.
    FiberOptic,
    /// A straight-walled guide launching a half-and-half wavefront.
    Waveguide,
    /// A line of phase-swept sources steering a beam.
    PhasedArray,
    /// Two source slots in the bottom wall interfering.
    DoubleSlit,
    /// A periodic row of source teeth in the bottom wall.
    DiffractionGrating,
    /// Alternating wall bars forming a serpentine path.
    Maze,
}

impl Mode {
    /// All modes in button-cycle order.
    pub const ALL: [Mode; 26] = [
        Mode::TouchOnly,
        Mode::RandomPoints,
        Mode::RandomPointsAbsorbing,
        Mode::Multifrequency,
        Mode::MultifrequencyAbsorbing,
        Mode::Monopole,
        Mode::MonopoleAbsorbing,
        Mode::Dipole,
        Mode::DipoleAbsorbing,
        Mode::Quadrupole,
        Mode::QuadrupoleAbsorbing,
        Mode::Superposition,
        Mode::FlatMirror,
        Mode::ParabolicMirror,
        Mode::EllipticMirror,
        Mode::Refraction,
        Mode::Prism,
        Mode::Lens,
        Mode::PartialInternalReflection,
        Mode::TotalInternalReflection,
        Mode::FiberOptic,
        Mode::Waveguide,
        Mode::PhasedArray,
        Mode::DoubleSlit,
        Mode::DiffractionGrating,
        Mode::Maze,
    ];

    /// Position of this mode in the cycle.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Mode at the given cycle position, if any.
    pub fn from_index(index: usize) -> Option<Mode> {
        Mode::ALL.get(index).copied()
    }

    /// The next mode in the cycle, wrapping after [`Mode::Maze`].
    #[must_use]
    pub fn next(self) -> Mode {
        Mode::ALL[(self.index() + 1) % Mode::ALL.len()]
    }

    /// The on-screen caption for this scene.
    pub fn label(self) -> &'static str {
        match self {
            Mode::TouchOnly => "TOUCH ONLY",
            Mode::RandomPoints => "RANDOM POINTS",
            Mode::RandomPointsAbsorbing => "RANDOM POINTS (ABSORBING BOUNDARY)",
            Mode::Multifrequency => "MULTIFREQUENCY POINTS",
            Mode::MultifrequencyAbsorbing => "MULTIFREQUENCY POINTS (ABSORBING BOUNDARY)",
            Mode::Monopole => "MONOPOLE",
            Mode::MonopoleAbsorbing => "MONOPOLE (ABSORBING BOUNDARY)",
            Mode::Dipole => "DIPOLE",
            Mode::DipoleAbsorbing => "DIPOLE (ABSORBING BOUNDARY)",
            Mode::Quadrupole => "QUADRUPOLE",
            Mode::QuadrupoleAbsorbing => "QUADRUPOLE (ABSORBING BOUNDARY)",
            Mode::Superposition => "SUPERPOSITION",
            Mode::FlatMirror => "FLAT MIRROR",
            Mode::ParabolicMirror => "PARABOLIC MIRROR",
            Mode::EllipticMirror => "ELLIPTIC MIRROR",
            Mode::Refraction => "REFRACTION",
            Mode::Prism => "PRISM",
            Mode::Lens => "LENS",
            Mode::PartialInternalReflection => "PARTIAL INTERNAL REFLECTION",
            Mode::TotalInternalReflection => "TOTAL INTERNAL REFLECTION",
            Mode::FiberOptic => "FIBER OPTIC CABLES",
            Mode::Waveguide => "WAVEGUIDE",
            Mode::PhasedArray => "PHASED ARRAY",
            Mode::DoubleSlit => "DOUBLE SLIT DIFFRACTION",
            Mode::DiffractionGrating => "DIFFRACTION GRATING",
            Mode::Maze => "MAZE",
        }
    }
}
