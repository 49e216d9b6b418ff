//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Available languages:")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t| t.bold().to_string())
    }

    /// Style for primary values (e.g., language identifiers)
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |t| t.cyan().to_string())
    }

    /// Style for secondary/supplementary info (e.g., template origin)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }
}

fn paint<T: Display>(text: T, styled: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        styled(&text)
    }
}
