//! Theme-based category generation, minus the network call.
//!
//! A text-generation service is asked for category names with
//! `theme_prompt`; its reply is split with `parse_category_names`, and the
//! names become blank categories the player fills in.

use crate::core::{Category, MashError, Result};

/// Categories requested per theme.
pub const CATEGORIES_PER_THEME: usize = 4;

/// Blank options per generated category.
pub const OPTIONS_PER_CATEGORY: usize = 3;

/// Category names of the classic paper game.
pub const CLASSIC_CATEGORY_NAMES: [&str; 4] = ["Spouse", "Number of kids", "Job", "Car"];

/// Build the prompt asking for category names for a theme.
pub fn theme_prompt(theme: &str) -> Result<String> {
    let theme = theme.trim();
    if theme.is_empty() {
        return Err(MashError::invalid_argument("theme must not be empty"));
    }

    Ok(format!(
        "Generate {count} diverse and creative categories for a MASH game based on the theme: {theme}. \
         Return only the categories, one per line, without any introductory or concluding remarks. \
         For example, if the theme is 'Superheroes', return: Strength\nAgility\nSuper Power\nWeakness",
        count = CATEGORIES_PER_THEME,
        theme = theme,
    ))
}

/// Split a generated reply into trimmed, non-empty lines.
#[must_use]
pub fn parse_category_names(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// One category per name, each with `options` empty placeholders.
pub fn blank_categories<I, S>(names: I, options: usize) -> Result<Vec<Category>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(|name| Category::new(name, std::iter::repeat(String::new()).take(options)))
        .collect()
}

/// The classic game's categories with blank options.
#[must_use]
pub fn classic_categories() -> Vec<Category> {
    CLASSIC_CATEGORY_NAMES
        .iter()
        .filter_map(|name| {
            Category::new(*name, std::iter::repeat(String::new()).take(OPTIONS_PER_CATEGORY)).ok()
        })
        .collect()
}
