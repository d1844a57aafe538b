//! Step-by-step record of a game, for replaying the crossing-out.

use serde::{Deserialize, Serialize};

/// A single elimination round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationStep {
    /// Round number, starting at 1.
    pub round: usize,
    /// Cursor position in the flat sequence.
    pub cursor: usize,
    /// Length of the flat sequence the cursor indexed into.
    pub eligible: usize,
    /// Category index (0 is MASH).
    pub category: usize,
    /// Category name.
    pub category_name: String,
    /// Eliminated option.
    pub option: String,
}

/// Ordered elimination rounds of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EliminationTrace {
    steps: Vec<EliminationStep>,
}

impl EliminationTrace {
    /// Create an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: EliminationStep) {
        self.steps.push(step);
    }

    /// All rounds in order.
    #[must_use]
    pub fn steps(&self) -> &[EliminationStep] {
        &self.steps
    }

    /// Number of rounds played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Did the game finish without eliminating anything?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Eliminated options, in order.
    pub fn eliminated(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.option.as_str())
    }

    /// Rounds that hit a given category.
    pub fn for_category<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a EliminationStep> {
        self.steps.iter().filter(move |s| s.category_name == name)
    }
}

impl<'a> IntoIterator for &'a EliminationTrace {
    type Item = &'a EliminationStep;
    type IntoIter = std::slice::Iter<'a, EliminationStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
