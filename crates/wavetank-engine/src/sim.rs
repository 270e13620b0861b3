//! The synchronous simulator: one scene, one field, one frame buffer.
//!
//! [`Simulator`] is the callable core that the realtime driver wraps.
//! Each [`advance`](Simulator::advance) computes one tick and renders
//! it; the two mode/palette buttons and pointer samples arrive as plain
//! method calls between ticks.

use std::time::Instant;

use wavetank_core::{Mode, Palette, TickId, CELL_COUNT};
use wavetank_field::WaveField;

use crate::color;
use crate::config::{ConfigError, TankConfig};
use crate::input::{InputError, PointerTrail};
use crate::metrics::TickMetrics;
use crate::stepper;

/// A wave tank with its scene, pointer state, and rendered frame.
pub struct Simulator {
    config: TankConfig,
    field: WaveField,
    frame: Vec<u16>,
    pointer: PointerTrail,
    mode: Mode,
    palette: Palette,
    tick: TickId,
    /// Rebuild count, XOR-ed into the seed so every rebuild re-rolls
    /// the random layouts while staying reproducible per run.
    generation: u64,
}

impl Simulator {
    /// Build a simulator showing the configured initial scene.
    pub fn new(config: TankConfig) -> Result<Simulator, ConfigError> {
        config.validate()?;
        let mut field = WaveField::new();
        wavetank_scenes::build(config.initial_mode, &mut field, config.seed);
        Ok(Simulator {
            mode: config.initial_mode,
            palette: config.initial_palette,
            config,
            field,
            frame: vec![0; CELL_COUNT],
            pointer: PointerTrail::new(),
            tick: TickId(0),
            generation: 0,
        })
    }

    /// Compute one tick and render it into the frame buffer.
    pub fn advance(&mut self) -> TickMetrics {
        let start = Instant::now();
        stepper::advance(&mut self.field, self.tick);
        let wave_us = start.elapsed().as_micros() as u64;

        let render_start = Instant::now();
        color::render(&self.field, self.palette, &mut self.frame);
        let render_us = render_start.elapsed().as_micros() as u64;

        let metrics = TickMetrics {
            tick: self.tick,
            wave_us,
            render_us,
            total_us: start.elapsed().as_micros() as u64,
        };
        self.tick = self.tick.next();
        metrics
    }

    /// Inject one pointer sample. See [`PointerTrail::touch`].
    pub fn touch(&mut self, row: usize, col: usize) -> Result<(), InputError> {
        self.pointer.touch(&mut self.field, row, col)
    }

    /// End the current pointer contact. See [`PointerTrail::release`].
    pub fn release(&mut self) {
        self.pointer.release();
    }

    /// The mode button: next scene, next palette, fresh layout.
    ///
    /// When the cycle wraps and no pointer is available, the touch-only
    /// scene is skipped; an empty tank nobody can poke shows nothing.
    pub fn advance_mode(&mut self) {
        let mut next = self.mode.next();
        if next == Mode::TouchOnly && !self.config.pointer_available {
            next = next.next();
        }
        self.mode = next;
        self.palette = self.palette.next();
        self.rebuild();
    }

    /// The palette button: next palette, same scene, fresh layout.
    pub fn advance_palette(&mut self) {
        self.palette = self.palette.next();
        self.rebuild();
    }

    /// Rebuild the current scene from scratch.
    ///
    /// Random-placement scenes roll a new layout. The tick counter
    /// restarts so sources ramp from silence, and the frame clears
    /// until the next [`advance`](Simulator::advance) repaints it.
    /// Pointer contact state is kept; a drag may span a rebuild.
    pub fn rebuild(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        wavetank_scenes::build(self.mode, &mut self.field, self.config.seed ^ self.generation);
        self.tick = TickId(0);
        self.frame.fill(0);
    }

    /// The rendered frame, one RGB565 pixel per cell in row-major order.
    pub fn frame(&self) -> &[u16] {
        &self.frame
    }

    /// The current scene.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The active palette.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// The next tick to be computed.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// The on-screen caption for the current scene.
    pub fn label(&self) -> &'static str {
        self.mode.label()
    }

    /// Read access to the underlying field.
    pub fn field(&self) -> &WaveField {
        &self.field
    }

    /// The configuration this simulator was built with.
    pub fn config(&self) -> &TankConfig {
        &self.config
    }
}
