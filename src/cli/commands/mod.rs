//! Command implementations.

/// Snippet emission handler.
pub mod emit;

/// Language listing handler.
pub mod list;
