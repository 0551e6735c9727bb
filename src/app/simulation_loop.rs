use crate::clock::{frame_budget, Clock, FramePacer, ManualClock};
use crate::commands::{Command, Flow};
use crate::config::DEFAULT_FPS;
use crate::profile_scope;
use crate::simulation::Simulation;

use super::command_loop;

/// One frame of the driver: apply queued input, then run `ticks` physics steps.
///
/// Commands are always applied before any stepping so insertions and removals never land in
/// the middle of an integration or collision pass. A quit command returns at once.
pub fn run_frame<C: Clock>(
    simulation: &mut Simulation<C>,
    commands: impl IntoIterator<Item = Command>,
    ticks: u32,
) -> Flow {
    for cmd in commands {
        if command_loop::handle_command(cmd, simulation) == Flow::Exit {
            return Flow::Exit;
        }
    }

    {
        profile_scope!("simulation_loop");
        for _ in 0..ticks {
            simulation.step();
        }
    }

    let energy = simulation.energy();
    tracing::trace!(
        frame = simulation.frame,
        kinetic = energy.kinetic,
        potential = energy.potential,
        total = energy.total(),
        "energy"
    );

    #[cfg(feature = "profiling")]
    {
        crate::PROFILER.lock().end_frame(600);
    }

    Flow::Continue
}

/// Milliseconds one frame represents on the manual clock, rounded to the nearest millisecond.
/// Uncapped runs use the default rate so highlight decay still progresses.
pub fn nominal_frame_ms(target_fps: u32) -> u64 {
    let fps = if target_fps == 0 { DEFAULT_FPS } else { target_fps };
    frame_budget(fps).map_or(0, |budget| {
        (budget.as_secs_f64() * 1000.0).round().max(1.0) as u64
    })
}

/// Drive the simulation without a window: one tick per frame, paced by `FramePacer` when
/// `pace` is set. The manual clock advances by the nominal frame period each frame, which
/// keeps highlight decay deterministic.
pub fn run_headless(
    simulation: &mut Simulation<ManualClock>,
    ticks: usize,
    pace: bool,
    report_every: usize,
) {
    let mut pacer = FramePacer::new();
    for tick in 0..ticks {
        if run_frame(simulation, std::iter::empty(), 1) == Flow::Exit {
            break;
        }
        simulation.clock.advance(nominal_frame_ms(simulation.target_fps));

        if report_every > 0 && (tick + 1) % report_every == 0 {
            let energy = simulation.energy();
            let lit = simulation.particles.iter().filter(|p| p.collided).count();
            tracing::info!(
                "tick {:>6}: {} particles, {} highlighted, KE {:.2}, PE {:.2}, total {:.2}",
                simulation.frame,
                simulation.particles.len(),
                lit,
                energy.kinetic,
                energy.potential,
                energy.total()
            );
        }

        if pace {
            pacer.tick(simulation.target_fps);
        }
    }
}
