//! Wave stepping, rendering, and the realtime driver for the Wavetank
//! simulator.
//!
//! The synchronous core is [`Simulator`]: build one from a
//! [`TankConfig`], call [`advance`](Simulator::advance) per frame, and
//! read pixels back from [`frame`](Simulator::frame). [`RealtimeTank`]
//! wraps the same simulator in a paced tick thread with a command
//! channel for UIs that want frames pushed at a fixed rate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod driver;
pub mod hud;
pub mod input;
pub mod metrics;
pub mod sim;
pub mod stepper;

pub use config::{ConfigError, TankConfig, DEFAULT_TICK_RATE_HZ};
pub use driver::{FrameSnapshot, RealtimeTank, SubmitError, TankCommand};
pub use input::{InputError, PointerTrail};
pub use metrics::TickMetrics;
pub use sim::Simulator;
pub use stepper::SourceAmplitudes;
