// particle/mod.rs
// Re-exports for the particle module

mod trail;
mod types;

pub use trail::*;
pub use types::*;
