// simulation/simulation.rs
// Contains the Simulation struct and main methods (new, step, iterate)

use super::collision::{self, CollisionStats};
use super::energy::{self, EnergyReport};
use super::integrator;
use crate::clock::{Clock, WallClock};
use crate::config::SimConfig;
use crate::particle::Particle;
use crate::profile_scope;
use rand::{rng, rngs::StdRng, Rng, SeedableRng};
use ultraviolet::Vec2;

/// The whole mutable state of a running simulation.
///
/// Everything the frame driver and the input handlers touch lives here and is passed by
/// reference; there is no module-level state.
pub struct Simulation<C: Clock = WallClock> {
    /// Ticks advanced so far
    pub frame: usize,
    pub particles: Vec<Particle>,
    pub config: SimConfig,
    /// Current frame-rate target; 0 means uncapped
    pub target_fps: u32,
    pub show_trails: bool,
    pub clock: C,
    pub rng: StdRng,
    next_id: u64,
}

impl Simulation<WallClock> {
    /// An empty simulation on the wall clock. Populate it with
    /// [`crate::app::spawn::populate`].
    pub fn new(config: SimConfig) -> Self {
        Self::with_clock(config, WallClock::new())
    }
}

impl<C: Clock> Simulation<C> {
    pub fn with_clock(config: SimConfig, clock: C) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rng().random()),
        };
        Self {
            frame: 0,
            particles: Vec::new(),
            target_fps: config.target_fps,
            show_trails: config.show_trails,
            config,
            clock,
            rng,
            next_id: 1,
        }
    }

    /// Advance one tick: integrate every particle, then resolve every overlap against the
    /// freshly integrated positions, then expire old highlights.
    pub fn step(&mut self) -> CollisionStats {
        profile_scope!("simulation_step");
        self.iterate();

        let now = self.clock.now_ms();
        let stats = collision::resolve_all(
            &mut self.particles,
            self.config.broad_phase,
            self.config.restitution,
            now,
        );
        self.decay_highlights(now);

        self.frame += 1;
        if stats.overlaps > 0 {
            tracing::trace!(frame = self.frame, ?stats, "collisions");
        }
        stats
    }

    /// Integrate all particles. Must finish before any collision test runs.
    pub fn iterate(&mut self) {
        profile_scope!("integrate");
        let gravity = self.config.gravity;
        let (width, height) = (self.config.width, self.config.height);
        for particle in &mut self.particles {
            integrator::integrate(particle, gravity, width, height);
        }
    }

    pub fn decay_highlights(&mut self, now_ms: u64) {
        let highlight_ms = self.config.highlight_ms;
        for particle in &mut self.particles {
            particle.decay_highlight(now_ms, highlight_ms);
        }
    }

    pub fn energy(&self) -> EnergyReport {
        energy::measure(&self.particles, self.config.gravity, self.config.floor_y())
    }

    /// Append a particle whose bounding box starts at `pos`. Returns its id.
    pub fn add_particle(&mut self, pos: Vec2, vel: Vec2) -> u64 {
        let id = self.take_id();
        self.particles.push(Particle::new(
            id,
            pos,
            vel,
            self.config.particle_size,
            self.config.density,
        ));
        id
    }

    /// Append a particle centered on `center`. Returns its id.
    pub fn add_particle_centered(&mut self, center: Vec2, vel: Vec2) -> u64 {
        let id = self.take_id();
        self.particles.push(Particle::centered_at(
            id,
            center,
            vel,
            self.config.particle_size,
            self.config.density,
        ));
        id
    }

    /// Remove the oldest particle, if any.
    pub fn remove_oldest(&mut self) -> Option<Particle> {
        if self.particles.is_empty() {
            None
        } else {
            Some(self.particles.remove(0))
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
