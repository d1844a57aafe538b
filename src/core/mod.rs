//! Core game types: categories, the magic number, errors, configuration, RNG.
//!
//! Everything here is validated at construction, so the engine can assume
//! well-formed input.

pub mod category;
pub mod config;
pub mod error;
pub mod magic;
pub mod rng;

pub use category::{validate_all, Category, RawCategory, MASH_CATEGORY_NAME, MASH_OPTIONS};
pub use config::{EngineConfig, RemovalPolicy};
pub use error::{MashError, Result};
pub use magic::{MagicNumber, MAGIC_NUMBER_MAX, MAGIC_NUMBER_MIN};
pub use rng::{MagicNumberSource, MashRng, MashRngState, ThreadMagicNumbers};
