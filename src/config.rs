// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

// ====================
// Window/World
// ====================
pub const WINDOW_WIDTH: f32 = 1000.0; // World width, matches the window in pixels
pub const WINDOW_HEIGHT: f32 = 900.0; // World height; the floor sits at this y

// ====================
// Particle Parameters
// ====================
pub const DENSITY: f32 = 1.0;
pub const PARTICLE_SIZE: f32 = 40.0; // Diameter
pub const NUM_PARTICLES: usize = 5; // Particles created at start
/// Largest magnitude of each random initial velocity component
pub const INITIAL_SPEED: f32 = 0.2;
/// Number of recent centers kept for motion trails
pub const TRAIL_LENGTH: usize = 15;

// ====================
// Physics
// ====================
pub const GRAVITY_X: f32 = 0.0;
pub const GRAVITY_Y: f32 = 0.15; // Per-step velocity increment, y points down
/// Fraction of normal relative velocity kept after a collision
pub const RESTITUTION: f32 = 0.99;

// ====================
// Frame Pacing
// ====================
pub const DEFAULT_FPS: u32 = 145;
pub const FPS_STEP: u32 = 10;
/// Frame rate must be above this before a decrement is applied
pub const MIN_FPS_FOR_DECREMENT: u32 = 5;
/// Upper bound on catch-up ticks a single rendered frame may run
pub const MAX_TICKS_PER_FRAME: u32 = 8;

// ====================
// DISPLAY/GUI Parameters
// ====================
pub const SHOW_TRAILS: bool = true;
/// How long a particle stays highlighted after an overlap (milliseconds)
pub const HIGHLIGHT_MS: u64 = 125;
/// Trail dots are drawn at this fraction of the particle size
pub const TRAIL_DOT_FRACTION: f32 = 1.0 / 12.0;

/// Candidate-pair generation used before the exact overlap test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadPhase {
    /// Every unordered pair is tested.
    #[default]
    AllPairs,
    /// AABB tree over particle bounds; same pairs, fewer tests when sparse.
    SweepTree,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub width: f32,
    pub height: f32,
    pub gravity: Vec2,
    pub restitution: f32,
    pub density: f32,
    pub particle_size: f32,
    pub initial_particles: usize,
    pub initial_speed: f32,
    /// Frame rate restored by the reset and cap toggle controls
    pub target_fps: u32,
    pub show_trails: bool,
    pub highlight_ms: u64,
    pub broad_phase: BroadPhase,
    /// Fixed seed for reproducible placement; entropy is used when absent
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            gravity: Vec2::new(GRAVITY_X, GRAVITY_Y),
            restitution: RESTITUTION,
            density: DENSITY,
            particle_size: PARTICLE_SIZE,
            initial_particles: NUM_PARTICLES,
            initial_speed: INITIAL_SPEED,
            target_fps: DEFAULT_FPS,
            show_trails: SHOW_TRAILS,
            highlight_ms: HIGHLIGHT_MS,
            broad_phase: BroadPhase::AllPairs,
            seed: None,
        }
    }
}

impl SimConfig {
    /// The floor line particles rest against.
    pub fn floor_y(&self) -> f32 {
        self.height
    }

    /// Check the values the physics relies on.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::Error;

        if !(self.particle_size.is_finite() && self.particle_size > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "particle_size must be finite and > 0 (got {})",
                self.particle_size
            )));
        }
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= self.particle_size
            || self.height <= self.particle_size
        {
            return Err(Error::InvalidConfig(format!(
                "world {}x{} must be larger than particle_size {}",
                self.width, self.height, self.particle_size
            )));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "density must be finite and > 0 (got {})",
                self.density
            )));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(Error::InvalidConfig(format!(
                "restitution must lie in [0, 1] (got {})",
                self.restitution
            )));
        }
        if !(self.gravity.x.is_finite() && self.gravity.y.is_finite()) {
            return Err(Error::InvalidConfig("gravity must be finite".to_string()));
        }
        if !(self.initial_speed.is_finite() && self.initial_speed >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "initial_speed must be finite and >= 0 (got {})",
                self.initial_speed
            )));
        }
        Ok(())
    }
}
