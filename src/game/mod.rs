//! Game Core Module
//!
//! Everything that advances on the fixed 60 Hz tick: the two phase
//! actors, projectiles, collision registry, energy state machine and
//! best-time persistence. Nothing in here touches the window, the GPU
//! or the audio device - rendering and playback consume this state from
//! the outside, which is also what keeps the whole module testable.
//!
//! Key concepts:
//! - Runner / Flyer: the phase-1 and phase-2 player actors
//! - Registry: live entity sets plus collide-and-destroy queries
//! - EnergyMachine: the bounded scalar that drives phase transitions
//! - GameSession: one tick of the whole simulation

pub mod best_time;
pub mod constants;
pub mod energy;
pub mod events;
pub mod flyer;
pub mod frames;
pub mod projectile;
pub mod registry;
pub mod renderer;
pub mod runner;
pub mod runtime;

// Re-export main types
pub use energy::Phase;
pub use events::SoundCue;
pub use renderer::Renderer;
pub use runtime::GameSession;
