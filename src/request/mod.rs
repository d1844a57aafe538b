//! Request boundary.
//!
//! Turns loosely-typed game requests into validated engine inputs, and
//! holds the pure-text side of theme-based category generation (prompt
//! construction and reply parsing). Nothing here performs I/O.

mod game;
mod theme;

pub use game::GameRequest;
pub use theme::{
    blank_categories, classic_categories, parse_category_names, theme_prompt, CATEGORIES_PER_THEME,
    CLASSIC_CATEGORY_NAMES, OPTIONS_PER_CATEGORY,
};
