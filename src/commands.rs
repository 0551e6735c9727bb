// commands.rs
// Discrete user actions applied to the simulation between frames

use ultraviolet::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Window closed or Escape pressed
    Quit,
    /// Append a randomly placed particle
    AddParticle,
    /// Remove the oldest particle
    RemoveOldest,
    /// Append a particle centered on a world point
    SpawnAt(Vec2),
    ResetFrameRate,
    IncreaseFrameRate,
    DecreaseFrameRate,
    /// Switch between uncapped and the default frame rate
    ToggleFrameCap,
    ToggleTrails,
}

/// Whether the frame driver should keep going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
