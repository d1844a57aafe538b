//! The elimination engine.
//!
//! - `pool`: survivor pool and flat-sequence rebuilds
//! - `elimination`: the round-robin elimination loop
//! - `fortune`: the final name-to-option mapping
//! - `trace`: optional per-round record of a game

pub mod elimination;
pub mod fortune;
pub mod pool;
pub mod trace;

pub use elimination::{play, play_raw, EliminationEngine};
pub use fortune::Fortune;
pub use pool::{Eligibility, FlatEntry, SurvivorPool};
pub use trace::{EliminationStep, EliminationTrace};
