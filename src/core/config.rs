//! Engine configuration.
//!
//! The defaults give index-based elimination over the eligible options
//! only. `EngineConfig::legacy()` reproduces the historic value-based
//! behaviour, including its treatment of single-option categories.

use serde::{Deserialize, Serialize};

/// How a selected option leaves its category's survivor list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalPolicy {
    /// Remove exactly the entry the cursor points at.
    #[default]
    ByPosition,
    /// Remove the first survivor equal to the selected value.
    ///
    /// With duplicate option strings this can remove a different
    /// occurrence than the one selected.
    ByValue,
}

/// Elimination engine configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Removal policy (default: by position).
    pub removal: RemovalPolicy,

    /// Include single-option categories in the opening flat sequence.
    ///
    /// When true, the first pick can land on a single-option category and
    /// empty it. Later rebuilds always skip single-option categories.
    pub count_settled_at_start: bool,
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration matching the historic implementation bit-for-bit.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            removal: RemovalPolicy::ByValue,
            count_settled_at_start: true,
        }
    }

    /// Set the removal policy.
    #[must_use]
    pub fn with_removal(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }

    /// Include single-option categories in the opening sequence.
    #[must_use]
    pub fn counting_settled_at_start(mut self) -> Self {
        self.count_settled_at_start = true;
        self
    }
}
