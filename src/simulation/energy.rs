// simulation/energy.rs
// Read-only mechanical energy bookkeeping

use crate::particle::Particle;
use ultraviolet::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnergyReport {
    pub kinetic: f32,
    /// Measured from the floor up, using the vertical gravity component
    pub potential: f32,
}

impl EnergyReport {
    pub fn total(&self) -> f32 {
        self.kinetic + self.potential
    }
}

/// Total kinetic and potential energy. Never feeds back into the simulation.
pub fn measure(particles: &[Particle], gravity: Vec2, floor_y: f32) -> EnergyReport {
    particles
        .iter()
        .fold(EnergyReport::default(), |mut report, particle| {
            report.kinetic += particle.kinetic_energy();
            report.potential += particle.mass() * gravity.y * (floor_y - particle.center().y);
            report
        })
}
