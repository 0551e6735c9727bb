// particle/types.rs
// Contains the Particle struct and its derived geometry

use super::trail::Trail;
use std::f32::consts::PI;
use ultraviolet::Vec2;

#[derive(Clone, Debug)]
pub struct Particle {
    pub id: u64,
    /// Top-left corner of the bounding box, not the center
    pub pos: Vec2,
    /// World units per simulation step
    pub vel: Vec2,
    pub trail: Trail,
    /// Highlight flag, set on overlap and cleared once the highlight expires
    pub collided: bool,
    /// Clock time of the most recent overlap
    pub collision_stamp_ms: u64,
    size: f32,
    radius: f32,
    mass: f32,
}

impl Particle {
    /// Build a particle whose bounding box starts at `pos`. Radius and mass are fixed here for
    /// the particle's lifetime.
    pub fn new(id: u64, pos: Vec2, vel: Vec2, size: f32, density: f32) -> Self {
        let radius = size / 2.0;
        let mass = density * PI * radius * radius;
        Self {
            id,
            pos,
            vel,
            trail: Trail::starting_at(pos + Vec2::broadcast(radius)),
            collided: false,
            collision_stamp_ms: 0,
            size,
            radius,
            mass,
        }
    }

    /// Build a particle whose center is `center`.
    pub fn centered_at(id: u64, center: Vec2, vel: Vec2, size: f32, density: f32) -> Self {
        let offset = Vec2::broadcast(size / 2.0);
        Self::new(id, center - offset, vel, size, density)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::broadcast(self.radius)
    }

    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.mag_sq()
    }

    /// Strict circle overlap; touching circles do not count.
    pub fn overlaps(&self, other: &Particle) -> bool {
        (self.center() - other.center()).mag() < self.radius + other.radius
    }

    /// Light the collision highlight at clock time `now_ms`.
    pub fn mark_collided(&mut self, now_ms: u64) {
        self.collided = true;
        self.collision_stamp_ms = now_ms;
    }

    /// Clear the highlight once more than `highlight_ms` has passed since the last overlap.
    pub fn decay_highlight(&mut self, now_ms: u64, highlight_ms: u64) {
        if now_ms.saturating_sub(self.collision_stamp_ms) > highlight_ms {
            self.collided = false;
        }
    }
}
