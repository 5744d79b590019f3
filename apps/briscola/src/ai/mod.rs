//! AI players for the computer seat.
//!
//! - `Maestro`: the default one-ply heuristic opponent
//! - `RandomPlayer`: seedable random baseline
//! - a static registry, opponent naming, and an adapter that lets an AI
//!   answer for the human seat

mod autopilot;
mod heuristic;
pub mod naming;
mod random;
pub mod registry;
mod trait_def;

pub use autopilot::AutopilotInput;
pub use heuristic::Maestro;
pub use naming::generate_ai_name;
pub use random::RandomPlayer;
pub use registry::create_ai;
pub use trait_def::{AiError, AiPlayer};
