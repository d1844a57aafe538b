//! Categories and their options.
//!
//! ## Category
//!
//! A validated name plus a non-empty, ordered list of options. Duplicate
//! option strings are allowed and are treated as distinct positions.
//!
//! ## RawCategory
//!
//! The loosely-typed shape a category arrives in (every field optional).
//! Converting it into a `Category` is where `MalformedInput` is raised.
//!
//! ## MASH
//!
//! The housing category is injected ahead of caller categories on every
//! game and is never validated.

use serde::{Deserialize, Serialize};

use super::error::{MashError, Result};

/// Name of the always-present housing category.
pub const MASH_CATEGORY_NAME: &str = "MASH";

/// Options of the housing category, in play order.
pub const MASH_OPTIONS: [&str; 4] = ["Mansion", "Apartment", "Shack", "House"];

/// A named category with at least one option.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCategory")]
pub struct Category {
    name: String,
    options: Vec<String>,
}

impl Category {
    /// Create a validated category.
    ///
    /// Fails with `MalformedInput` if the name is empty or there are no
    /// options.
    pub fn new<I, S>(name: impl Into<String>, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        if name.is_empty() {
            return Err(MashError::malformed("category `name` must not be empty"));
        }
        if options.is_empty() {
            return Err(MashError::malformed(format!(
                "category `{}` must have at least one option",
                name
            )));
        }

        Ok(Self { name, options })
    }

    /// The fixed Mansion/Apartment/Shack/House category.
    #[must_use]
    pub fn mash() -> Self {
        Self {
            name: MASH_CATEGORY_NAME.to_string(),
            options: MASH_OPTIONS.iter().map(|o| (*o).to_string()).collect(),
        }
    }

    /// Category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Options in their original order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false for a validated category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Does this category have exactly one option?
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.options.len() == 1
    }

    /// Is `option` one of this category's options?
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

impl TryFrom<RawCategory> for Category {
    type Error = MashError;

    fn try_from(raw: RawCategory) -> Result<Self> {
        let name = raw
            .name
            .ok_or_else(|| MashError::malformed("category is missing `name`"))?;
        let options = raw
            .options
            .ok_or_else(|| MashError::malformed(format!("category `{}` is missing `options`", name)))?;
        Self::new(name, options)
    }
}

/// A category as supplied by a caller, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    /// Category name, if present.
    #[serde(default)]
    pub name: Option<String>,

    /// Options, if present.
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

impl RawCategory {
    /// A raw category with both fields set.
    pub fn new<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            options: Some(options.into_iter().map(Into::into).collect()),
        }
    }

    /// Set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the options.
    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Validate into a `Category`.
    pub fn validate(&self) -> Result<Category> {
        Category::try_from(self.clone())
    }
}

impl From<Category> for RawCategory {
    fn from(category: Category) -> Self {
        Self {
            name: Some(category.name),
            options: Some(category.options),
        }
    }
}

/// Validate every raw category, reporting the first failure with its index.
pub fn validate_all(raw: &[RawCategory]) -> Result<Vec<Category>> {
    raw.iter()
        .enumerate()
        .map(|(i, category)| {
            category.validate().map_err(|err| match err {
                MashError::MalformedInput(msg) => {
                    MashError::malformed(format!("categories[{}]: {}", i, msg))
                }
                other => other,
            })
        })
        .collect()
}
