// init_config.rs
// Handles loading and parsing the optional init_config.toml overrides

use crate::config::{BroadPhase, SimConfig};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use ultraviolet::Vec2;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "init_config.toml";
/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "BOUNCE_SIM_CONFIG";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InitConfig {
    pub simulation: Option<SimulationConfig>,
    #[serde(default)]
    pub particles: ParticlesConfig,
}

/// Every field is optional; omitted values keep the built-in defaults.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// `[x, y]`, y pointing down
    pub gravity: Option<[f32; 2]>,
    pub restitution: Option<f32>,
    pub density: Option<f32>,
    pub particle_size: Option<f32>,
    pub initial_particles: Option<usize>,
    pub initial_speed: Option<f32>,
    pub target_fps: Option<u32>,
    pub show_trails: Option<bool>,
    pub highlight_ms: Option<u64>,
    pub broad_phase: Option<BroadPhase>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParticlesConfig {
    /// Particles placed before the random initial population
    #[serde(default)]
    pub placed: Vec<PlacedParticleConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlacedParticleConfig {
    /// Center x
    pub x: f32,
    /// Center y
    pub y: f32,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
}

impl PlacedParticleConfig {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.vx, self.vy)
    }

    /// Coordinates and velocity must be finite; wall reflection cannot recover a NaN.
    pub fn validate(&self) -> Result<()> {
        if [self.x, self.y, self.vx, self.vy].iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(Error::InvalidConfig(format!(
                "placed particle must have finite x, y, vx, vy (got {self:?})"
            )))
        }
    }
}

impl SimulationConfig {
    /// Overlay these values on `base`.
    pub fn apply(&self, base: SimConfig) -> SimConfig {
        SimConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            gravity: self
                .gravity
                .map(|[x, y]| Vec2::new(x, y))
                .unwrap_or(base.gravity),
            restitution: self.restitution.unwrap_or(base.restitution),
            density: self.density.unwrap_or(base.density),
            particle_size: self.particle_size.unwrap_or(base.particle_size),
            initial_particles: self.initial_particles.unwrap_or(base.initial_particles),
            initial_speed: self.initial_speed.unwrap_or(base.initial_speed),
            target_fps: self.target_fps.unwrap_or(base.target_fps),
            show_trails: self.show_trails.unwrap_or(base.show_trails),
            highlight_ms: self.highlight_ms.unwrap_or(base.highlight_ms),
            broad_phase: self.broad_phase.unwrap_or(base.broad_phase),
            seed: self.seed.or(base.seed),
        }
    }
}

impl InitConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `BOUNCE_SIM_CONFIG` or `init_config.toml`. A missing default file means
    /// "use the defaults"; a missing file named explicitly through the environment is an error.
    pub fn load_default() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from_file(PathBuf::from(path)),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_file(path)
                } else {
                    tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Defaults with this file's overrides applied. Validates the placed particles too.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let config = match &self.simulation {
            Some(overrides) => overrides.apply(SimConfig::default()),
            None => SimConfig::default(),
        };
        config.validate()?;
        for placed in &self.particles.placed {
            placed.validate()?;
        }
        Ok(config)
    }
}
