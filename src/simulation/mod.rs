// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod collision;
pub mod energy;
pub mod integrator;
pub mod simulation;
pub use simulation::*;

#[cfg(test)]
mod tests;
