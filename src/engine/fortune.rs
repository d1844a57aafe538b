//! The result of a game: one surviving option per category.

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from category name to its surviving option.
///
/// Keeps insertion order (MASH first, then caller order). Inserting an
/// existing name replaces the value but keeps the original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fortune {
    entries: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
}

impl Fortune {
    /// Create an empty fortune.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the surviving option for a category.
    ///
    /// Returns the previous value if the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, option: impl Into<String>) -> Option<String> {
        let name = name.into();
        let option = option.into();

        if let Some(&slot) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[slot].1, option));
        }

        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, option));
        None
    }

    /// Surviving option for a category.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&slot| self.entries[slot].1.as_str())
    }

    /// Does the fortune have an entry for this category?
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the fortune empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Housing outcome (the MASH entry).
    #[must_use]
    pub fn home(&self) -> Option<&str> {
        self.get(crate::core::MASH_CATEGORY_NAME)
    }

    /// Iterate `(name, option)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, o)| (n.as_str(), o.as_str()))
    }

    /// Category names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Convert into a sorted map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries.into_iter().collect()
    }
}

impl<N: Into<String>, O: Into<String>> FromIterator<(N, O)> for Fortune {
    fn from_iter<T: IntoIterator<Item = (N, O)>>(iter: T) -> Self {
        let mut fortune = Fortune::new();
        for (name, option) in iter {
            fortune.insert(name, option);
        }
        fortune
    }
}

impl Serialize for Fortune {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, option) in &self.entries {
            map.serialize_entry(name, option)?;
        }
        map.end()
    }
}

struct FortuneVisitor;

impl<'de> Visitor<'de> for FortuneVisitor {
    type Value = Fortune;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category name to option")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Fortune, A::Error> {
        let mut fortune = Fortune::new();
        while let Some((name, option)) = map.next_entry::<String, String>()? {
            fortune.insert(name, option);
        }
        Ok(fortune)
    }
}

impl<'de> Deserialize<'de> for Fortune {
    /// Entries are inserted in the order they appear; a repeated key
    /// overwrites in place.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FortuneVisitor)
    }
}

impl fmt::Display for Fortune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, option)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, option)?;
        }
        Ok(())
    }
}
