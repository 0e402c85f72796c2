use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Edit a generated caption with toolbar-style commands")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Caption file to load (reads stdin when omitted and stdin is piped)
	pub caption: Option<PathBuf>,

	/// Editing command to run, repeatable (e.g. "format bold 0 5")
	#[arg(short = 'c', long = "command", value_name = "CMD")]
	pub commands: Vec<String>,

	/// File with one editing command per line
	#[arg(short, long, value_name = "PATH")]
	pub script: Option<PathBuf>,

	/// Config file (defaults to the user config directory)
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Print the post preview instead of the raw caption at the end
	#[arg(long)]
	pub preview: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
