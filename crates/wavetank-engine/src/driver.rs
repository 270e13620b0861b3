//! Realtime driver: a dedicated tick thread paced to the configured
//! rate.
//!
//! The tick thread owns the [`Simulator`] exclusively (moved in via
//! `thread::spawn`). Commands arrive through a bounded crossbeam
//! channel and are drained between ticks; each rendered frame is
//! published into a mutex slot that UI threads clone out of at their
//! own pace. Stopping joins the thread and hands the simulator back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError};

use wavetank_core::{Mode, Palette, TickId};

use crate::config::{ConfigError, TankConfig};
use crate::sim::Simulator;

/// Capacity of the command channel between user threads and the tick
/// thread.
const COMMAND_QUEUE_DEPTH: usize = 64;

// ── Commands and frames ────────────────────────────────────────────

/// A control input submitted to the tick thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TankCommand {
    /// One pointer sample at `(row, col)`.
    Touch {
        /// Sampled row.
        row: usize,
        /// Sampled column.
        col: usize,
    },
    /// The pointer lifted.
    Release,
    /// The mode button: next scene, next palette.
    AdvanceMode,
    /// The palette button: next palette.
    AdvancePalette,
    /// Rebuild the current scene from scratch.
    ResetScene,
}

/// One published frame with the state it was rendered under.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    /// RGB565 pixels, one per cell in row-major order.
    pub pixels: Vec<u16>,
    /// The tick this frame shows.
    pub tick: TickId,
    /// Scene at render time.
    pub mode: Mode,
    /// Palette at render time.
    pub palette: Palette,
    /// On-screen caption for the scene.
    pub label: &'static str,
    /// Running count of touch samples rejected as out of bounds.
    pub rejected_inputs: u64,
}

// ── SubmitError ────────────────────────────────────────────────────

/// Errors from [`RealtimeTank::submit`].
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The tank has shut down; the command channel is gone.
    Shutdown,
    /// The command channel is full; the tick thread is not keeping up.
    ChannelFull,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tank is shut down"),
            Self::ChannelFull => write!(f, "command channel is full"),
        }
    }
}

impl std::error::Error for SubmitError {}

// ── RealtimeTank ───────────────────────────────────────────────────

/// A simulator running on its own thread at a fixed tick rate.
pub struct RealtimeTank {
    cmd_tx: Option<Sender<TankCommand>>,
    latest: Arc<Mutex<FrameSnapshot>>,
    shutdown_flag: Arc<AtomicBool>,
    tick_thread: Option<JoinHandle<Simulator>>,
}

impl RealtimeTank {
    /// Validate the configuration and start the tick thread.
    pub fn new(config: TankConfig) -> Result<RealtimeTank, ConfigError> {
        let sim = Simulator::new(config)?;
        let budget = Duration::from_secs_f64(1.0 / sim.config().tick_rate_hz);

        let latest = Arc::new(Mutex::new(FrameSnapshot {
            pixels: sim.frame().to_vec(),
            tick: sim.tick(),
            mode: sim.mode(),
            palette: sim.palette(),
            label: sim.label(),
            rejected_inputs: 0,
        }));
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(COMMAND_QUEUE_DEPTH);

        let thread_latest = Arc::clone(&latest);
        let thread_shutdown = Arc::clone(&shutdown_flag);
        let tick_thread = thread::Builder::new()
            .name("wavetank-tick".into())
            .spawn(move || tick_loop(sim, cmd_rx, thread_latest, thread_shutdown, budget))
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("tick thread: {e}"),
            })?;

        Ok(RealtimeTank {
            cmd_tx: Some(cmd_tx),
            latest,
            shutdown_flag,
            tick_thread: Some(tick_thread),
        })
    }

    /// Queue a command for the tick thread.
    ///
    /// Commands apply between ticks in submission order. The channel is
    /// bounded; a full channel reports [`SubmitError::ChannelFull`]
    /// rather than blocking the caller.
    pub fn submit(&self, command: TankCommand) -> Result<(), SubmitError> {
        let tx = self.cmd_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        match tx.try_send(command) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(SubmitError::ChannelFull),
            Err(TrySendError::Disconnected(_)) => Err(SubmitError::Shutdown),
        }
    }

    /// Clone out the most recently published frame.
    pub fn latest_frame(&self) -> FrameSnapshot {
        self.latest.lock().unwrap().clone()
    }

    /// Stop the tick thread and recover the simulator.
    pub fn stop(mut self) -> Result<Simulator, ConfigError> {
        self.shutdown_flag.store(true, Ordering::Release);
        self.cmd_tx.take();
        match self.tick_thread.take() {
            Some(handle) => handle.join().map_err(|_| ConfigError::SimulatorRecoveryFailed),
            None => Err(ConfigError::SimulatorRecoveryFailed),
        }
    }
}

impl Drop for RealtimeTank {
    fn drop(&mut self) {
        self.shutdown_flag.store(true, Ordering::Release);
        self.cmd_tx.take();
        if let Some(handle) = self.tick_thread.take() {
            let _ = handle.join();
        }
    }
}

// ── Tick thread ────────────────────────────────────────────────────

/// Main tick loop. Runs until the shutdown flag is set, then returns
/// the simulator so [`RealtimeTank::stop`] can recover it.
fn tick_loop(
    mut sim: Simulator,
    cmd_rx: Receiver<TankCommand>,
    latest: Arc<Mutex<FrameSnapshot>>,
    shutdown: Arc<AtomicBool>,
    budget: Duration,
) -> Simulator {
    let mut rejected_inputs = 0u64;
    loop {
        if shutdown.load(Ordering::Acquire) {
            break;
        }
        let tick_start = Instant::now();

        // 1. Drain pending commands.
        while let Ok(command) = cmd_rx.try_recv() {
            apply(&mut sim, command, &mut rejected_inputs);
        }

        // 2. Compute and render the tick.
        let metrics = sim.advance();

        // 3. Publish the frame.
        {
            let mut slot = latest.lock().unwrap();
            slot.pixels.copy_from_slice(sim.frame());
            slot.tick = metrics.tick;
            slot.mode = sim.mode();
            slot.palette = sim.palette();
            slot.label = sim.label();
            slot.rejected_inputs = rejected_inputs;
        }

        // 4. Sleep out the remaining budget.
        if let Some(remaining) = budget.checked_sub(tick_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
    sim
}

fn apply(sim: &mut Simulator, command: TankCommand, rejected_inputs: &mut u64) {
    match command {
        TankCommand::Touch { row, col } => {
            if sim.touch(row, col).is_err() {
                *rejected_inputs += 1;
            }
        }
        TankCommand::Release => sim.release(),
        TankCommand::AdvanceMode => sim.advance_mode(),
        TankCommand::AdvancePalette => sim.advance_palette(),
        TankCommand::ResetScene => sim.rebuild(),
    }
}
