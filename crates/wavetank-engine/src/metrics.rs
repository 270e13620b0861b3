//! Per-tick timing counters.

use wavetank_core::TickId;

/// Timings recorded by [`Simulator::advance`](crate::sim::Simulator::advance).
///
/// All durations are wall-clock microseconds. `total_us` covers the whole
/// call, so it is at least `wave_us + render_us`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// The tick that was just computed.
    pub tick: TickId,
    /// Time spent in the two-pass field update.
    pub wave_us: u64,
    /// Time spent mapping amplitudes to pixels.
    pub render_us: u64,
    /// Total time for the tick.
    pub total_us: u64,
}
