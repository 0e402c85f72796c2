//! Editing commands and the driver that runs them against a session.
//!
//! Each command mirrors one toolbar or keyboard action of the editor:
//!
//! ```text
//! format <op> <start> <end>   style or list-format a char span
//! emoji <symbol> <caret>      insert a symbol at a char offset
//! type <text>                 replace the caption as if edited by hand
//! append <text>               type at the end of the caption
//! undo | redo | clear
//! palette [category]          list emoji symbols
//! stats | preview | print     show the caption
//! ```
//!
//! `type` and `append` take the rest of the line verbatim, with `\n`, `\t`
//! and `\\` escapes. Exactly one whitespace char separates the command word
//! from that text; any further leading whitespace is part of the text, so
//! `type  hi` types `" hi"`.

use std::io::{self, Write};
use std::str::FromStr;

use quill_editor::{CaptionSession, CharIdx, EditorConfig, EmojiCategory, FormatOp, FormatOpError};
use thiserror::Error;
use tracing::{info, warn};

/// One parsed editing command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Apply a format operation to `start..end`.
	Format {
		/// Operation to apply.
		op: FormatOp,
		/// Selection start.
		start: CharIdx,
		/// Selection end.
		end: CharIdx,
	},
	/// Insert a symbol at a caret.
	Emoji {
		/// Symbol to insert.
		symbol: String,
		/// Caret offset.
		caret: CharIdx,
	},
	/// Replace the whole caption.
	Type(String),
	/// Append to the caption.
	Append(String),
	/// Undo the last change.
	Undo,
	/// Redo the last undone change.
	Redo,
	/// Empty the caption.
	Clear,
	/// List emoji symbols, for one category or the configured default.
	Palette(Option<EmojiCategory>),
	/// Print caption statistics.
	Stats,
	/// Print the post preview.
	Preview,
	/// Print the caption.
	Print,
}

/// Errors from parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
	/// The line holds no command.
	#[error("empty command")]
	Empty,

	/// The command word is not known.
	#[error("unknown command: {0}")]
	Unknown(String),

	/// A required argument is missing.
	#[error("{command}: missing argument <{name}>")]
	MissingArgument {
		/// Command word.
		command: &'static str,
		/// Argument name.
		name: &'static str,
	},

	/// More arguments than the command takes.
	#[error("{command}: unexpected argument '{value}'")]
	UnexpectedArgument {
		/// Command word.
		command: &'static str,
		/// First extra argument.
		value: String,
	},

	/// An offset is not a non-negative integer.
	#[error("{command}: invalid offset '{value}'")]
	InvalidOffset {
		/// Command word.
		command: &'static str,
		/// The offending value.
		value: String,
	},

	/// The format operation name is unknown.
	#[error(transparent)]
	Format(#[from] FormatOpError),

	/// The emoji category name is unknown.
	#[error("unknown emoji category: {0}")]
	Category(String),
}

impl FromStr for Command {
	type Err = CommandError;

	fn from_str(line: &str) -> Result<Self, Self::Err> {
		let line = line.trim_start();
		let word_end = line.find(char::is_whitespace).unwrap_or(line.len());
		let (word, rest) = line.split_at(word_end);
		let rest = strip_separator(rest);
		if word.is_empty() {
			return Err(CommandError::Empty);
		}

		let mut args = rest.split_whitespace();
		let command = match word {
			"format" => {
				let op = required(&mut args, "format", "op")?.parse::<FormatOp>()?;
				let start = offset(&mut args, "format", "start")?;
				let end = offset(&mut args, "format", "end")?;
				Command::Format { op, start, end }
			}
			"emoji" => {
				let symbol = required(&mut args, "emoji", "symbol")?.to_owned();
				let caret = offset(&mut args, "emoji", "caret")?;
				Command::Emoji { symbol, caret }
			}
			"type" => return Ok(Command::Type(unescape(rest))),
			"append" => return Ok(Command::Append(unescape(rest))),
			"undo" => Command::Undo,
			"redo" => Command::Redo,
			"clear" => Command::Clear,
			"palette" => match args.next() {
				Some(name) => Command::Palette(Some(
					name.parse::<EmojiCategory>()
						.map_err(|_| CommandError::Category(name.to_owned()))?,
				)),
				None => Command::Palette(None),
			},
			"stats" => Command::Stats,
			"preview" => Command::Preview,
			"print" => Command::Print,
			other => return Err(CommandError::Unknown(other.to_owned())),
		};

		if let Some(extra) = args.next() {
			return Err(CommandError::UnexpectedArgument {
				command: command.word(),
				value: extra.to_owned(),
			});
		}
		Ok(command)
	}
}

impl Command {
	fn word(&self) -> &'static str {
		match self {
			Command::Format { .. } => "format",
			Command::Emoji { .. } => "emoji",
			Command::Type(_) => "type",
			Command::Append(_) => "append",
			Command::Undo => "undo",
			Command::Redo => "redo",
			Command::Clear => "clear",
			Command::Palette(_) => "palette",
			Command::Stats => "stats",
			Command::Preview => "preview",
			Command::Print => "print",
		}
	}
}

fn required<'a>(
	args: &mut impl Iterator<Item = &'a str>,
	command: &'static str,
	name: &'static str,
) -> Result<&'a str, CommandError> {
	args.next()
		.ok_or(CommandError::MissingArgument { command, name })
}

fn offset<'a>(
	args: &mut impl Iterator<Item = &'a str>,
	command: &'static str,
	name: &'static str,
) -> Result<CharIdx, CommandError> {
	let value = required(args, command, name)?;
	value.parse().map_err(|_| CommandError::InvalidOffset {
		command,
		value: value.to_owned(),
	})
}

/// Drops the single whitespace char that ends the command word.
fn strip_separator(rest: &str) -> &str {
	let mut chars = rest.chars();
	match chars.next() {
		Some(ch) if ch.is_whitespace() => chars.as_str(),
		_ => rest,
	}
}

fn unescape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut chars = text.chars();
	while let Some(ch) = chars.next() {
		if ch != '\\' {
			out.push(ch);
			continue;
		}
		match chars.next() {
			Some('n') => out.push('\n'),
			Some('t') => out.push('\t'),
			Some(other) => {
				if other != '\\' {
					out.push('\\');
				}
				out.push(other);
			}
			None => out.push('\\'),
		}
	}
	out
}

/// Runs commands against one caption session, writing output to `out`.
pub struct Driver<W> {
	session: CaptionSession,
	default_category: EmojiCategory,
	out: W,
}

impl<W: Write> Driver<W> {
	/// Creates a driver with an empty session.
	pub fn new(config: &EditorConfig, out: W) -> Self {
		Self {
			session: CaptionSession::with_config(config),
			default_category: config.emoji.default_category,
			out,
		}
	}

	/// Loads a freshly generated caption.
	pub fn load(&mut self, caption: &str) {
		self.session.set_caption(caption);
	}

	/// Returns the session being edited.
	pub fn session(&self) -> &CaptionSession {
		&self.session
	}

	/// Runs one command.
	pub fn execute(&mut self, command: &Command) -> io::Result<()> {
		match command {
			Command::Format { op, start, end } => {
				match self.session.apply_format(*op, *start, *end) {
					Some(outcome) => {
						if outcome.splits_cluster {
							warn!(op = %op, "selection splits a combined character");
						}
						info!(
							op = %op,
							start = outcome.selection.start(),
							end = outcome.selection.end(),
							"formatted"
						);
					}
					None => info!(op = %op, "nothing selected"),
				}
			}
			Command::Emoji { symbol, caret } => {
				let caret = self.session.insert_emoji(symbol, *caret);
				info!(%symbol, caret, "emoji inserted");
			}
			Command::Type(text) => self.session.replace_text(text),
			Command::Append(text) => {
				let mut next = self.session.text();
				next.push_str(text);
				self.session.replace_text(&next);
			}
			Command::Undo => {
				if !self.session.undo() {
					info!("nothing to undo");
				}
			}
			Command::Redo => {
				if !self.session.redo() {
					info!("nothing to redo");
				}
			}
			Command::Clear => self.session.clear_all(),
			Command::Palette(category) => {
				let category = category.unwrap_or(self.default_category);
				writeln!(self.out, "{}: {}", category.label(), category.emojis().join(" "))?;
			}
			Command::Stats => writeln!(self.out, "{}", self.session.stats())?,
			Command::Preview => writeln!(self.out, "{}", self.session.preview())?,
			Command::Print => writeln!(self.out, "{}", self.session.text())?,
		}
		Ok(())
	}

	/// Writes the final caption (or its preview) and returns the writer.
	pub fn finish(mut self, preview: bool) -> io::Result<W> {
		if preview {
			writeln!(self.out, "{}", self.session.preview())?;
		} else {
			writeln!(self.out, "{}", self.session.text())?;
		}
		self.out.flush()?;
		Ok(self.out)
	}
}
