//! Semi-implicit Euler step and wall reflection for a single particle.
//!
//! Positions move by the current velocity first, then gravity is added only while the
//! particle's bottom edge is strictly above the floor, so a grounded particle does not keep
//! accelerating into it.

use crate::particle::Particle;
use ultraviolet::Vec2;

/// Advance one particle by one tick and record its new center in the trail.
pub fn integrate(particle: &mut Particle, gravity: Vec2, width: f32, height: f32) {
    particle.pos += particle.vel;
    if particle.pos.y < height - particle.size() {
        particle.vel += gravity;
    }
    reflect_from_walls(particle, width, height);
    let center = particle.center();
    particle.trail.record(center);
}

/// Reflect off the four walls. Every wall is checked against the position as it was on entry,
/// so a particle wedged in a corner reflects on both axes in the same step.
pub fn reflect_from_walls(particle: &mut Particle, width: f32, height: f32) {
    let Vec2 { x, y } = particle.pos;
    let size = particle.size();

    // Right
    if x >= width - size {
        particle.vel.x = -particle.vel.x;
        particle.pos.x = width - size;
    }
    // Left
    if x <= 0.0 {
        particle.vel.x = -particle.vel.x;
        particle.pos.x = 0.0;
    }
    // Top
    if y <= 0.0 {
        particle.vel.y = -particle.vel.y;
        particle.pos.y = 0.0;
    }
    // Floor
    if y >= height - size {
        particle.vel.y = -particle.vel.y;
        particle.pos.y = height - size;
    }
}
