//! Core types for caption editing: char offsets, selections, and rope splices.

/// Edit provenance tags.
pub mod edit;
/// Grapheme cluster boundary detection.
pub mod graphemes;
/// Char index types and the selection span.
pub mod range;
/// Rope utilities and extensions.
pub mod rope;

pub use edit::EditOrigin;
pub use range::{CharIdx, CharLen, Selection};
pub use rope::{char_len, splice, visible_line_count};
pub use ropey::{Rope, RopeSlice};
