//! The elimination engine.
//!
//! ## Algorithm
//!
//! 1. Prepend the MASH category to the caller's categories.
//! 2. Copy every category's options into the survivor pool.
//! 3. Build the opening flat sequence and set the cursor to
//!    `(magic - 1) mod len`.
//! 4. While more options survive than there are categories: remove the
//!    entry under the cursor, rebuild the flat sequence from categories
//!    that still have more than one survivor, stop if it is empty,
//!    otherwise advance the cursor by `magic - 1` modulo the new length.
//! 5. Map every category name to its first (and only) survivor.
//!
//! The engine is a pure function of its inputs; it never mutates the
//! caller's categories.

use tracing::{debug, trace};

use super::fortune::Fortune;
use super::pool::{Eligibility, SurvivorPool};
use super::trace::{EliminationStep, EliminationTrace};
use crate::core::{validate_all, Category, EngineConfig, MagicNumber, RawCategory, Result};

/// Runs MASH games under a fixed configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct EliminationEngine {
    config: EngineConfig,
}

impl EliminationEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Play one game.
    #[must_use]
    pub fn play(&self, categories: &[Category], magic: MagicNumber) -> Fortune {
        self.run(categories, magic, None)
    }

    /// Play one game, recording every elimination round.
    #[must_use]
    pub fn play_traced(&self, categories: &[Category], magic: MagicNumber) -> (Fortune, EliminationTrace) {
        let mut trace = EliminationTrace::new();
        let fortune = self.run(categories, magic, Some(&mut trace));
        (fortune, trace)
    }

    /// Validate loosely-typed inputs, then play.
    ///
    /// The magic number is checked first (`InvalidArgument`), then each
    /// category (`MalformedInput`). No game state exists until both pass.
    pub fn play_raw(&self, categories: &[RawCategory], magic_number: i64) -> Result<Fortune> {
        let magic = MagicNumber::new(magic_number)?;
        let categories = validate_all(categories)?;
        Ok(self.play(&categories, magic))
    }

    fn run(
        &self,
        categories: &[Category],
        magic: MagicNumber,
        mut record: Option<&mut EliminationTrace>,
    ) -> Fortune {
        let all: Vec<Category> = std::iter::once(Category::mash())
            .chain(categories.iter().cloned())
            .collect();
        let mut pool = SurvivorPool::new(&all);

        let opening = if self.config.count_settled_at_start {
            Eligibility::All
        } else {
            Eligibility::Unsettled
        };
        let mut flat = pool.flat_sequence(opening);
        let step = magic.step();
        let mut cursor = if flat.is_empty() { 0 } else { step % flat.len() };

        debug!(
            magic = magic.get(),
            categories = all.len(),
            options = pool.total(),
            removal = ?self.config.removal,
            "Starting MASH game"
        );

        let mut round = 0;
        while pool.total() > pool.category_count() && !flat.is_empty() {
            let entry = flat[cursor];
            let eligible = flat.len();
            let option = match pool.remove(entry, self.config.removal) {
                Some(option) => option,
                None => break,
            };
            round += 1;

            trace!(round, cursor, eligible, category = %all[entry.category].name(), option = %option, "Eliminated");

            if let Some(record) = record.as_mut() {
                record.push(EliminationStep {
                    round,
                    cursor,
                    eligible,
                    category: entry.category,
                    category_name: all[entry.category].name().to_string(),
                    option,
                });
            }

            flat = pool.flat_sequence(Eligibility::Unsettled);
            if flat.is_empty() {
                break;
            }
            cursor = (cursor + step) % flat.len();
        }

        let fortune: Fortune = all
            .iter()
            .zip(pool.into_survivors())
            .filter_map(|(category, survivors)| {
                survivors
                    .into_iter()
                    .next()
                    .map(|option| (category.name().to_string(), option))
            })
            .collect();

        debug!(rounds = round, fortune = %fortune, "MASH game finished");
        fortune
    }
}

/// Play one game with the default configuration.
///
/// ```
/// use mash::core::{Category, MagicNumber};
///
/// let categories = vec![
///     Category::new("Food", ["Mushy peas", "Chips", "Beans"]).unwrap(),
///     Category::new("Colours", ["Red", "Blue", "Green"]).unwrap(),
/// ];
/// let fortune = mash::play(&categories, MagicNumber::new(3).unwrap());
///
/// assert_eq!(fortune.get("MASH"), Some("Mansion"));
/// assert_eq!(fortune.get("Food"), Some("Mushy peas"));
/// assert_eq!(fortune.get("Colours"), Some("Red"));
/// ```
#[must_use]
pub fn play(categories: &[Category], magic: MagicNumber) -> Fortune {
    EliminationEngine::default().play(categories, magic)
}

/// Validate loosely-typed inputs and play with the default configuration.
pub fn play_raw(categories: &[RawCategory], magic_number: i64) -> Result<Fortune> {
    EliminationEngine::default().play_raw(categories, magic_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MashError, RemovalPolicy};

    fn magic(n: i64) -> MagicNumber {
        MagicNumber::new(n).unwrap()
    }

    fn food_and_colours() -> Vec<Category> {
        vec![
            Category::new("Food", ["Mushy peas", "Chips", "Beans"]).unwrap(),
            Category::new("Colours", ["Red", "Blue", "Green"]).unwrap(),
        ]
    }

    #[test]
    fn test_trace_of_known_game() {
        let (fortune, trace) = EliminationEngine::default().play_traced(&food_and_colours(), magic(3));

        let eliminated: Vec<_> = trace.eliminated().collect();
        assert_eq!(
            eliminated,
            vec!["Shack", "Chips", "Blue", "Apartment", "Beans", "House", "Green"]
        );

        let cursors: Vec<_> = trace.steps().iter().map(|s| (s.cursor, s.eligible)).collect();
        assert_eq!(cursors, vec![(2, 10), (4, 9), (6, 8), (1, 7), (3, 6), (1, 4), (1, 2)]);

        assert_eq!(fortune.get("MASH"), Some("Mansion"));
        assert_eq!(fortune.get("Food"), Some("Mushy peas"));
        assert_eq!(fortune.get("Colours"), Some("Red"));
    }

    #[test]
    fn test_round_count_bound() {
        let categories = food_and_colours();
        for m in MagicNumber::all() {
            let (_, trace) = EliminationEngine::default().play_traced(&categories, m);
            // 10 options, 3 categories
            assert_eq!(trace.len(), 7);
        }
    }

    #[test]
    fn test_mash_only() {
        let fortune = play(&[], magic(4));
        assert_eq!(fortune.len(), 1);
        assert_eq!(fortune.home(), Some("Apartment"));
    }

    #[test]
    fn test_inputs_untouched() {
        let categories = food_and_colours();
        let before = categories.clone();
        let _ = play(&categories, magic(7));
        assert_eq!(categories, before);
    }

    #[test]
    fn test_play_raw_checks_magic_first() {
        let raw = vec![RawCategory::default().with_name("Pet")];
        assert!(matches!(play_raw(&raw, 1), Err(MashError::InvalidArgument(_))));
        assert!(matches!(play_raw(&raw, 3), Err(MashError::MalformedInput(_))));
    }

    #[test]
    fn test_by_position_vs_by_value() {
        let snack = vec![Category::new("Snack", ["Crisps", "Toast", "Crisps"]).unwrap()];

        let by_position = EliminationEngine::default().play(&snack, magic(7));
        let by_value =
            EliminationEngine::new(EngineConfig::new().with_removal(RemovalPolicy::ByValue)).play(&snack, magic(7));

        assert_eq!(by_position.get("Snack"), Some("Crisps"));
        assert_eq!(by_value.get("Snack"), Some("Toast"));
        assert_eq!(by_position.home(), by_value.home());
    }
}
