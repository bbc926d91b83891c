//! Terminal frontend: an interactive session and a batch simulator.

mod play;
mod simulate;

pub use play::play_session;
pub use simulate::{SimulationReport, simulate};
