//! # mash
//!
//! The fortune-telling game MASH (Mansion, Apartment, Shack, House) as a
//! deterministic elimination engine.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same categories and magic number, same fortune.
//!    Randomness only enters through a `MagicNumberSource`.
//!
//! 2. **Validate at the Boundary**: `Category` and `MagicNumber` can only
//!    hold valid values, so a game that starts always finishes.
//!
//! 3. **Rebuild, Don't Patch**: The flat elimination sequence is rebuilt
//!    after every removal; its length drives the cursor arithmetic.
//!
//! ## Modules
//!
//! - `core`: Categories, magic number, errors, configuration, RNG
//! - `engine`: Survivor pool, elimination loop, fortune, trace
//! - `request`: JSON game requests and theme prompt helpers
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod engine;
pub mod request;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Category, RawCategory, MASH_CATEGORY_NAME, MASH_OPTIONS,
    MagicNumber, MAGIC_NUMBER_MIN, MAGIC_NUMBER_MAX,
    MagicNumberSource, MashRng, MashRngState, ThreadMagicNumbers,
    EngineConfig, RemovalPolicy,
    MashError, Result,
};

pub use crate::engine::{
    play, play_raw, EliminationEngine,
    Fortune, EliminationStep, EliminationTrace,
};

pub use crate::request::GameRequest;
