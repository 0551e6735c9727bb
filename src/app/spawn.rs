use crate::clock::Clock;
use crate::init_config::PlacedParticleConfig;
use crate::particle::Particle;
use crate::simulation::Simulation;
use rand::Rng;
use ultraviolet::Vec2;

/// Random placement tries this many spots before accepting an overlap.
pub const RANDOM_ATTEMPTS: usize = 100;

/// A velocity component in `[-speed, speed]` with a random sign.
fn random_component<R: Rng>(rng: &mut R, speed: f32) -> f32 {
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    sign * rng.random::<f32>() * speed
}

/// Random starting velocity, each component bounded by `speed`.
pub fn sample_velocity<R: Rng>(rng: &mut R, speed: f32) -> Vec2 {
    Vec2::new(random_component(rng, speed), random_component(rng, speed))
}

/// Random top-left position anywhere inside the world.
pub fn sample_position<R: Rng>(rng: &mut R, width: f32, height: f32, size: f32) -> Vec2 {
    Vec2::new(
        rng.random::<f32>() * (width - size + 1.0),
        rng.random::<f32>() * (height - size + 1.0),
    )
}

pub fn overlaps_any(existing: &[Particle], pos: Vec2, size: f32) -> Option<usize> {
    let radius = size / 2.0;
    let center = pos + Vec2::broadcast(radius);
    existing
        .iter()
        .position(|p| (p.center() - center).mag() < (p.radius() + radius))
}

/// Append one randomly placed particle. Tries to find a free spot first; if the world is too
/// crowded the last sample is used anyway. Returns the new particle's id.
pub fn add_random<C: Clock>(simulation: &mut Simulation<C>) -> u64 {
    let (width, height) = (simulation.config.width, simulation.config.height);
    let size = simulation.config.particle_size;
    let speed = simulation.config.initial_speed;

    let mut pos = sample_position(&mut simulation.rng, width, height, size);
    for _ in 1..RANDOM_ATTEMPTS {
        if overlaps_any(&simulation.particles, pos, size).is_none() {
            break;
        }
        pos = sample_position(&mut simulation.rng, width, height, size);
    }
    if overlaps_any(&simulation.particles, pos, size).is_some() {
        tracing::debug!("No free spot after {RANDOM_ATTEMPTS} attempts, placing overlapped");
    }
    let vel = sample_velocity(&mut simulation.rng, speed);
    simulation.add_particle(pos, vel)
}

/// Append a particle centered on `center` with a random velocity. Returns its id.
pub fn add_at_point<C: Clock>(simulation: &mut Simulation<C>, center: Vec2) -> u64 {
    let vel = sample_velocity(&mut simulation.rng, simulation.config.initial_speed);
    simulation.add_particle_centered(center, vel)
}

/// Create the starting population: explicitly placed particles first, then
/// `initial_particles` random ones.
pub fn populate<C: Clock>(simulation: &mut Simulation<C>, placed: &[PlacedParticleConfig]) {
    for particle in placed {
        simulation.add_particle_centered(particle.center(), particle.velocity());
    }
    for _ in 0..simulation.config.initial_particles {
        add_random(simulation);
    }
    tracing::info!("No. of particles: {}", simulation.particles.len());
}
