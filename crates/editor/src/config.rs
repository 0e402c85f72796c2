//! Editor configuration.
//!
//! Configuration is read from TOML. Every section and key is optional:
//!
//! ```toml
//! [history]
//! coalesce_typing = true
//! max_entries = 500
//!
//! [emoji]
//! default_category = "tech"
//!
//! [preview]
//! placeholder = "Nothing to preview yet"
//! ```
//!
//! Unknown keys are rejected so typos surface instead of silently falling
//! back to defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::emoji::EmojiCategory;

/// Text shown in the post preview while the caption is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Start writing and your post will appear here..\n\nYou can add images, links, #hashtags and emojis 😊\n\nThis line will appear below the more...";

/// Top-level editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
	/// Undo/redo behavior.
	pub history: HistoryConfig,
	/// Emoji palette settings.
	pub emoji: EmojiConfig,
	/// Post preview settings.
	pub preview: PreviewConfig,
}

/// Undo/redo history settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
	/// Fold consecutive typing edits into a single history entry.
	pub coalesce_typing: bool,
	/// Upper bound on stored snapshots; oldest are dropped first.
	pub max_entries: Option<usize>,
}

/// Emoji palette settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmojiConfig {
	/// Category shown when the palette opens.
	pub default_category: EmojiCategory,
}

/// Post preview settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
	/// Shown in place of an empty caption.
	pub placeholder: String,
}

impl Default for PreviewConfig {
	fn default() -> Self {
		Self {
			placeholder: DEFAULT_PLACEHOLDER.to_owned(),
		}
	}
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML or mapping it onto the config types.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl EditorConfig {
	/// Parses configuration from TOML source.
	pub fn from_toml(src: &str) -> Result<Self> {
		Ok(toml::from_str(src)?)
	}

	/// Reads and parses the configuration file at `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let src = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml(&src)?;
		debug!(path = %path.display(), "config loaded");
		Ok(config)
	}

	/// Loads the user config from [`default_path`], if one exists.
	///
	/// A missing file (or no config directory at all) yields the defaults.
	pub fn load_user() -> Result<Self> {
		match default_path() {
			Some(path) if path.is_file() => Self::load(&path),
			_ => Ok(Self::default()),
		}
	}
}

/// Returns `$XDG_CONFIG_HOME/quill/config.toml` (or the platform equivalent).
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("quill").join("config.toml"))
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn empty_source_is_default() {
		assert_eq!(EditorConfig::from_toml("").unwrap(), EditorConfig::default());
	}

	#[test]
	fn defaults() {
		let config = EditorConfig::default();
		assert!(!config.history.coalesce_typing);
		assert_eq!(config.history.max_entries, None);
		assert_eq!(config.emoji.default_category, EmojiCategory::Common);
		assert_eq!(config.preview.placeholder, DEFAULT_PLACEHOLDER);
	}

	#[test]
	fn parses_all_sections() {
		let config = EditorConfig::from_toml(
			r#"
			[history]
			coalesce_typing = true
			max_entries = 50

			[emoji]
			default_category = "tech"

			[preview]
			placeholder = "empty"
			"#,
		)
		.unwrap();
		assert!(config.history.coalesce_typing);
		assert_eq!(config.history.max_entries, Some(50));
		assert_eq!(config.emoji.default_category, EmojiCategory::Tech);
		assert_eq!(config.preview.placeholder, "empty");
	}

	#[test]
	fn partial_section_keeps_other_defaults() {
		let config = EditorConfig::from_toml("[history]\nmax_entries = 3\n").unwrap();
		assert!(!config.history.coalesce_typing);
		assert_eq!(config.history.max_entries, Some(3));
		assert_eq!(config.preview, PreviewConfig::default());
	}

	#[test]
	fn unknown_key_is_rejected() {
		let err = EditorConfig::from_toml("[history]\nmax_entires = 3\n").unwrap_err();
		assert!(matches!(err, ConfigError::Toml(_)));
	}

	#[test]
	fn unknown_category_is_rejected() {
		assert!(EditorConfig::from_toml("[emoji]\ndefault_category = \"food\"\n").is_err());
	}

	#[test]
	fn load_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[history]\ncoalesce_typing = true").unwrap();
		let config = EditorConfig::load(file.path()).unwrap();
		assert!(config.history.coalesce_typing);
	}

	#[test]
	fn load_missing_file_reports_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let err = EditorConfig::load(&path).unwrap_err();
		assert!(matches!(err, ConfigError::Io { .. }));
		assert!(err.to_string().contains("absent.toml"));
	}
}
