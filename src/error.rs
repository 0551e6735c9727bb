use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while setting up a simulation.
///
/// The physics loop itself has no failure modes: degenerate geometry and removal from an
/// empty collection are handled as no-ops where they occur.
#[derive(Debug, Error)]
pub enum Error {
    /// The config file exists but could not be read.
    #[error("could not read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::init_config::InitConfig`].
    #[error("could not parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value the physics cannot work with.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The logging subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}
