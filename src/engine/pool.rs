//! Survivor pool and the flat elimination sequence.
//!
//! The pool holds one ordered survivor list per category (MASH first).
//! The flat sequence is an ordered view over every `(category, position)`
//! still eligible for removal. It is rebuilt from scratch after every
//! removal: its length, not the raw survivor count, is the modulo base for
//! the cursor.

use serde::{Deserialize, Serialize};

use crate::core::{Category, RemovalPolicy};

/// One entry of the flat sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlatEntry {
    /// Index into the pool (0 is MASH).
    pub category: usize,
    /// Position within that category's current survivor list.
    pub position: usize,
}

/// Which categories contribute to a flat sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    /// Every surviving option of every category.
    All,
    /// Only categories with more than one survivor.
    Unsettled,
}

/// Per-category survivor lists for a single game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivorPool {
    survivors: Vec<Vec<String>>,
}

impl SurvivorPool {
    /// Copy the options of every category, preserving order.
    #[must_use]
    pub fn new(categories: &[Category]) -> Self {
        Self {
            survivors: categories.iter().map(|c| c.options().to_vec()).collect(),
        }
    }

    /// Number of categories in the pool.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.survivors.len()
    }

    /// Total surviving options across all categories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.survivors.iter().map(Vec::len).sum()
    }

    /// Survivors of one category.
    ///
    /// Returns an empty slice for an unknown index.
    #[must_use]
    pub fn survivors(&self, category: usize) -> &[String] {
        self.survivors.get(category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Option value at a flat entry.
    #[must_use]
    pub fn value(&self, entry: FlatEntry) -> Option<&str> {
        self.survivors
            .get(entry.category)?
            .get(entry.position)
            .map(String::as_str)
    }

    /// Is every category down to at most one survivor?
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.survivors.iter().all(|s| s.len() <= 1)
    }

    /// Enumerate eligible entries in category order, then option order.
    #[must_use]
    pub fn flat_sequence(&self, eligibility: Eligibility) -> Vec<FlatEntry> {
        self.survivors
            .iter()
            .enumerate()
            .filter(|(_, options)| match eligibility {
                Eligibility::All => true,
                Eligibility::Unsettled => options.len() > 1,
            })
            .flat_map(|(category, options)| {
                (0..options.len()).map(move |position| FlatEntry { category, position })
            })
            .collect()
    }

    /// Remove the option selected by `entry`.
    ///
    /// With `ByValue`, the first survivor equal to the selected value is
    /// removed instead of the selected position. Returns the removed value,
    /// or `None` if the entry does not exist.
    pub fn remove(&mut self, entry: FlatEntry, policy: RemovalPolicy) -> Option<String> {
        let options = self.survivors.get_mut(entry.category)?;
        if entry.position >= options.len() {
            return None;
        }

        let index = match policy {
            RemovalPolicy::ByPosition => entry.position,
            RemovalPolicy::ByValue => {
                let selected = &options[entry.position];
                options.iter().position(|o| o == selected).unwrap_or(entry.position)
            }
        };
        Some(options.remove(index))
    }

    /// Consume the pool, yielding the survivor lists in category order.
    #[must_use]
    pub fn into_survivors(self) -> Vec<Vec<String>> {
        self.survivors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> SurvivorPool {
        SurvivorPool::new(&[
            Category::mash(),
            Category::new("Pet", ["Dog"]).unwrap(),
            Category::new("Snack", ["Crisps", "Toast", "Crisps"]).unwrap(),
        ])
    }

    #[test]
    fn test_new_pool() {
        let pool = pool();
        assert_eq!(pool.category_count(), 3);
        assert_eq!(pool.total(), 8);
        assert_eq!(pool.survivors(1), &["Dog"]);
        assert!(pool.survivors(9).is_empty());
        assert!(!pool.is_resolved());
    }

    #[test]
    fn test_flat_sequence_all() {
        let flat = pool().flat_sequence(Eligibility::All);
        assert_eq!(flat.len(), 8);
        assert_eq!(flat[4], FlatEntry { category: 1, position: 0 });
        assert_eq!(flat[7], FlatEntry { category: 2, position: 2 });
    }

    #[test]
    fn test_flat_sequence_skips_settled() {
        let pool = pool();
        let flat = pool.flat_sequence(Eligibility::Unsettled);
        assert_eq!(flat.len(), 7);
        assert!(flat.iter().all(|e| e.category != 1));
        assert_eq!(pool.value(flat[4]), Some("Crisps"));
    }

    #[test]
    fn test_remove_by_position() {
        let mut pool = pool();
        let entry = FlatEntry { category: 2, position: 2 };
        assert_eq!(pool.remove(entry, RemovalPolicy::ByPosition).as_deref(), Some("Crisps"));
        assert_eq!(pool.survivors(2), &["Crisps", "Toast"]);
    }

    #[test]
    fn test_remove_by_value_takes_first_duplicate() {
        let mut pool = pool();
        let entry = FlatEntry { category: 2, position: 2 };
        assert_eq!(pool.remove(entry, RemovalPolicy::ByValue).as_deref(), Some("Crisps"));
        assert_eq!(pool.survivors(2), &["Toast", "Crisps"]);
    }

    #[test]
    fn test_remove_missing_entry() {
        let mut pool = pool();
        assert!(pool.remove(FlatEntry { category: 1, position: 3 }, RemovalPolicy::ByPosition).is_none());
        assert!(pool.remove(FlatEntry { category: 7, position: 0 }, RemovalPolicy::ByValue).is_none());
        assert_eq!(pool.total(), 8);
    }

    #[test]
    fn test_resolved() {
        let mut pool = SurvivorPool::new(&[Category::new("Car", ["VW", "Mini"]).unwrap()]);
        pool.remove(FlatEntry { category: 0, position: 0 }, RemovalPolicy::ByPosition);
        assert!(pool.is_resolved());
        assert!(pool.flat_sequence(Eligibility::Unsettled).is_empty());
        assert_eq!(pool.into_survivors(), vec![vec!["Mini".to_string()]]);
    }
}
