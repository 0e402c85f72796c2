//! Quill command-line driver.
//!
//! Loads a generated caption, runs toolbar-style editing commands over it,
//! and prints the result.

mod cli;
mod command;

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use command::{Command, Driver};
use quill_editor::EditorConfig;
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let config = match cli.config.as_deref() {
		Some(path) => EditorConfig::load(path)?,
		None => EditorConfig::load_user().context("failed to load user config")?,
	};

	let caption = read_caption(cli.caption.as_deref())?;

	let mut lines = Vec::new();
	if let Some(path) = cli.script.as_deref() {
		let src = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read script {}", path.display()))?;
		lines.extend(script_lines(&src).map(str::to_owned));
	}
	lines.extend(cli.commands);

	let mut driver = Driver::new(&config, io::stdout().lock());
	driver.load(&caption);

	for (n, line) in lines.iter().enumerate() {
		let command = line
			.parse::<Command>()
			.with_context(|| format!("command {}: '{line}'", n + 1))?;
		debug!(?command, "executing");
		driver.execute(&command)?;
	}

	debug!(stats = %driver.session().stats(), "editing finished");
	driver.finish(cli.preview)?;
	Ok(())
}

/// Reads the caption from `path`, or from stdin when it is piped.
fn read_caption(path: Option<&Path>) -> anyhow::Result<String> {
	let raw = match path {
		Some(path) => std::fs::read_to_string(path)
			.with_context(|| format!("failed to read caption {}", path.display()))?,
		None if !io::stdin().is_terminal() => {
			let mut buf = String::new();
			io::stdin()
				.read_to_string(&mut buf)
				.context("failed to read caption from stdin")?;
			buf
		}
		None => String::new(),
	};
	Ok(strip_final_newline(raw))
}

fn strip_final_newline(mut text: String) -> String {
	if text.ends_with('\n') {
		text.pop();
		if text.ends_with('\r') {
			text.pop();
		}
	}
	text
}

/// Yields the command lines of a script, skipping blanks and `#` comments.
fn script_lines(src: &str) -> impl Iterator<Item = &str> {
	src.lines().filter(|line| {
		let line = line.trim_start();
		!line.is_empty() && !line.starts_with('#')
	})
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("QUILL_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("quill_editor=trace,debug")
			} else {
				EnvFilter::new("warn")
			}
		});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(verbose)
		.init();
}
