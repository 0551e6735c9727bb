use crate::clock::Clock;
use crate::commands::{Command, Flow};
use crate::config::{FPS_STEP, MIN_FPS_FOR_DECREMENT};
use crate::profile_scope;
use crate::simulation::Simulation;

use super::spawn;

/// Apply one command between frames.
pub fn handle_command<C: Clock>(cmd: Command, simulation: &mut Simulation<C>) -> Flow {
    profile_scope!("command_handling");
    match cmd {
        Command::Quit => {
            tracing::info!("Quit requested after {} ticks", simulation.frame);
            return Flow::Exit;
        }
        Command::AddParticle => {
            spawn::add_random(simulation);
            tracing::info!("No. of particles: {}", simulation.particles.len());
        }
        Command::RemoveOldest => match simulation.remove_oldest() {
            Some(particle) => {
                tracing::info!(
                    "Removed particle {}. No. of particles: {}",
                    particle.id,
                    simulation.particles.len()
                );
            }
            None => tracing::warn!("No particles left to remove."),
        },
        Command::SpawnAt(center) => {
            spawn::add_at_point(simulation, center);
            tracing::info!("No. of particles: {}", simulation.particles.len());
        }
        Command::ResetFrameRate => {
            simulation.target_fps = simulation.config.target_fps;
            tracing::info!("FPS reset to {}.", simulation.target_fps);
        }
        Command::IncreaseFrameRate => {
            simulation.target_fps = simulation.target_fps.saturating_add(FPS_STEP);
            tracing::info!("FPS: {}", simulation.target_fps);
        }
        Command::DecreaseFrameRate => {
            if simulation.target_fps > MIN_FPS_FOR_DECREMENT {
                simulation.target_fps = simulation.target_fps.saturating_sub(FPS_STEP);
            }
            tracing::info!("FPS: {}", simulation.target_fps);
        }
        Command::ToggleFrameCap => {
            simulation.target_fps = if simulation.target_fps == 0 {
                simulation.config.target_fps
            } else {
                0
            };
            tracing::info!("FPS cap: {}", simulation.target_fps);
        }
        Command::ToggleTrails => {
            simulation.show_trails = !simulation.show_trails;
            tracing::debug!("Trails visible: {}", simulation.show_trails);
        }
    }
    Flow::Continue
}
