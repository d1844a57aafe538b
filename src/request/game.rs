//! Game requests: `{"categories": [...], "magic_number": n}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::core::{
    validate_all, Category, MagicNumber, MagicNumberSource, MashError, RawCategory, Result,
};
use crate::engine::{EliminationEngine, EliminationTrace, Fortune};

/// A validated game request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameRequest {
    /// Caller categories, in order (MASH is added by the engine).
    pub categories: Vec<Category>,
    /// Elimination stride.
    pub magic_number: MagicNumber,
}

impl GameRequest {
    /// Create a request from validated parts.
    #[must_use]
    pub fn new(categories: Vec<Category>, magic_number: MagicNumber) -> Self {
        Self {
            categories,
            magic_number,
        }
    }

    /// Validate a JSON request body.
    ///
    /// The magic number is checked before the categories, so a request
    /// with both problems reports `InvalidArgument`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let body = as_object(value)?;
        let magic_number = match body.get("magic_number") {
            Some(magic) => MagicNumber::try_from(magic)?,
            None => return Err(MashError::invalid_argument("request is missing `magic_number`")),
        };
        let categories = parse_categories(body.get("categories"))?;
        Ok(Self::new(categories, magic_number))
    }

    /// Validate a JSON request body, drawing a magic number if absent.
    pub fn from_json_or_draw(value: &Value, source: &mut impl MagicNumberSource) -> Result<Self> {
        let body = as_object(value)?;
        let magic_number = match body.get("magic_number") {
            Some(Value::Null) | None => source.next_magic_number(),
            Some(magic) => MagicNumber::try_from(magic)?,
        };
        let categories = parse_categories(body.get("categories"))?;
        Ok(Self::new(categories, magic_number))
    }

    /// Play this request.
    #[must_use]
    pub fn play(&self, engine: &EliminationEngine) -> Fortune {
        engine.play(&self.categories, self.magic_number)
    }

    /// Play this request, recording every round.
    #[must_use]
    pub fn play_traced(&self, engine: &EliminationEngine) -> (Fortune, EliminationTrace) {
        engine.play_traced(&self.categories, self.magic_number)
    }
}

impl FromStr for GameRequest {
    type Err = MashError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)
            .map_err(|e| MashError::malformed(format!("request is not valid JSON: {}", e)))?;
        Self::from_json(&value)
    }
}

fn as_object(value: &Value) -> Result<&serde_json::Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| MashError::malformed("request must be a JSON object"))
}

fn parse_categories(value: Option<&Value>) -> Result<Vec<Category>> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(MashError::malformed("`categories` must be a list")),
        None => return Err(MashError::malformed("request is missing `categories`")),
    };

    let raw = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            RawCategory::deserialize(item)
                .map_err(|e| MashError::malformed(format!("categories[{}]: {}", i, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    validate_all(&raw)
}
