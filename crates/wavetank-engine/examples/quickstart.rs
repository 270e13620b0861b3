//! Wavetank Quickstart: drive the simulator directly, no thread.
//!
//! Demonstrates:
//!   1. Building a TankConfig and a Simulator
//!   2. Advancing ticks and reading per-tick metrics
//!   3. Drawing a pointer stroke into the field
//!   4. Inspecting amplitudes and the rendered frame
//!   5. Switching scenes with the mode button
//!
//! Run with:
//!   cargo run --example quickstart

use wavetank_core::{Mode, HEIGHT, WIDTH};
use wavetank_engine::{Simulator, TankConfig};
use wavetank_field::flat;

// Downsampling strides for the terminal display.
const ROW_STRIDE: usize = 10;
const COL_STRIDE: usize = 4;

fn print_amplitudes(sim: &Simulator) {
    let u = sim.field().u();
    for row in (0..HEIGHT).step_by(ROW_STRIDE) {
        let line: String = (0..WIDTH)
            .step_by(COL_STRIDE)
            .map(|col| {
                let mag = u[flat(row, col)].unsigned_abs() >> 23;
                match mag {
                    0 => ' ',
                    1..=7 => '.',
                    8..=31 => '+',
                    _ => '#',
                }
            })
            .collect();
        println!("  |{line}|");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Wavetank Quickstart ===\n");

    // 1. Build a config: the double-slit scene, default palette and seed.
    let config = TankConfig {
        initial_mode: Mode::DoubleSlit,
        ..TankConfig::default()
    };
    let mut sim = Simulator::new(config)?;
    println!("Scene: {} ({}x{} cells)", sim.label(), WIDTH, HEIGHT);

    // 2. Run 120 ticks, printing metrics every 30.
    for _ in 0..120 {
        let metrics = sim.advance();
        if metrics.tick.0 % 30 == 0 {
            println!(
                "  tick {:>3}: wave={}μs render={}μs total={}μs",
                metrics.tick.0, metrics.wave_us, metrics.render_us, metrics.total_us,
            );
        }
    }

    // 3. Drag a pointer stroke across the middle of the tank.
    println!("\nDragging a stroke through the interference pattern...");
    sim.touch(HEIGHT / 2, 60)?;
    sim.touch(HEIGHT / 2, 120)?;
    sim.release();
    for _ in 0..30 {
        sim.advance();
    }

    // 4. Show the amplitude field, downsampled for the terminal.
    println!("\nAmplitudes at tick {}:", sim.tick().0);
    print_amplitudes(&sim);
    let lit = sim.frame().iter().filter(|&&px| px != 0).count();
    println!("  {lit} of {} pixels lit", sim.frame().len());

    // 5. Press the mode button and confirm the scene changed.
    sim.advance_mode();
    println!("\nMode button pressed. Scene: {}", sim.label());
    for _ in 0..30 {
        sim.advance();
    }
    print_amplitudes(&sim);

    println!("\nDone.");
    Ok(())
}
