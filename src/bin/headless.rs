//! Run the simulation without a window and log diagnostics.
//!
//! `BOUNCE_SIM_TICKS` sets the number of ticks (default 2000). `BOUNCE_SIM_PACED=1` sleeps to
//! the target frame rate between ticks instead of running flat out.

use bounce_sim::app::{self, simulation_loop};
use bounce_sim::clock::ManualClock;
use bounce_sim::logging;

const TICKS_ENV: &str = "BOUNCE_SIM_TICKS";
const PACED_ENV: &str = "BOUNCE_SIM_PACED";
const DEFAULT_TICKS: usize = 2000;
const REPORT_EVERY: usize = 100;

fn ticks_from_env() -> usize {
    match std::env::var(TICKS_ENV) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring {TICKS_ENV}={value:?}, using {DEFAULT_TICKS}");
            DEFAULT_TICKS
        }),
        Err(_) => DEFAULT_TICKS,
    }
}

fn run() -> bounce_sim::error::Result<()> {
    let ticks = ticks_from_env();
    let paced = std::env::var(PACED_ENV).is_ok_and(|v| v == "1");

    let mut simulation = app::prepare(ManualClock::default())?;
    tracing::info!(
        "Running {ticks} ticks headless with {} particles",
        simulation.particles.len()
    );
    simulation_loop::run_headless(&mut simulation, ticks, paced, REPORT_EVERY);

    let energy = simulation.energy();
    tracing::info!(
        "Finished after {} ticks, total energy {:.2}",
        simulation.frame,
        energy.total()
    );
    Ok(())
}

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }
    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
