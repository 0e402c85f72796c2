//! Caption editing engine.
//!
//! Turns a generated caption into an editable buffer with toolbar actions:
//! Unicode bold/italic styling, combining-mark strikethrough and underline,
//! bullet and numbered lists, emoji insertion, and linear undo/redo.
//!
//! # Architecture
//!
//! ```text
//! CaptionSession ──► format::apply_format ──► style / list transforms
//!       │        ──► emoji::insert_emoji
//!       │        ──► History (snapshot per mutation)
//!       └──────────► Preview / CaptionStats (read-only)
//! ```
//!
//! All operations are synchronous and total: out-of-range offsets are
//! clamped, never reported.

/// Editor configuration loaded from TOML.
pub mod config;
/// Emoji palette and caret insertion.
pub mod emoji;
/// Selection-scoped formatting operations.
pub mod format;
/// Undo/redo snapshot history.
pub mod history;
/// Line-oriented list formatting.
pub mod list;
/// Post preview and caption statistics.
pub mod preview;
/// The caption editing session.
pub mod session;
/// Unicode glyph styles and combining overlays.
pub mod style;

pub use config::{ConfigError, EditorConfig};
pub use emoji::EmojiCategory;
pub use format::{FormatOp, FormatOpError, FormatOutcome};
pub use history::{History, HistoryEntry};
pub use preview::{CaptionStats, Preview};
pub use quill_primitives::{CharIdx, Selection};
pub use session::CaptionSession;
pub use style::Style;
