use crate::clock::Clock;
use crate::error::Result;
use crate::init_config::InitConfig;
use crate::simulation::Simulation;

pub mod command_loop;
pub mod simulation_loop;
pub mod spawn;

/// Load the config and build a populated simulation on `clock`.
pub fn prepare<C: Clock>(clock: C) -> Result<Simulation<C>> {
    let init = InitConfig::load_default()?;
    let config = init.sim_config()?;
    tracing::debug!(?config, "Loaded configuration");

    let mut simulation = Simulation::with_clock(config, clock);
    spawn::populate(&mut simulation, &init.particles.placed);
    Ok(simulation)
}

/// Open the window and run until quit. Configuration errors surface here, before any window
/// exists.
#[cfg(feature = "gui")]
pub fn run() -> Result<()> {
    let config = InitConfig::load_default()?.sim_config()?;

    let config = quarkstrom::Config {
        window_mode: quarkstrom::WindowMode::Windowed(config.width as u32, config.height as u32),
    };
    quarkstrom::run::<crate::renderer::Renderer>(config);
    Ok(())
}
