use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `discolor` binary.
#[derive(Parser, Debug)]
#[command(
	name = "discolor",
	version,
	long_version = long_version(),
	about = "Compose ANSI-coloured Discord messages in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DISCOLOR_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TEXT",
		help = "Start with this text instead of the welcome message; `-` reads stdin"
	)]
	pub(crate) text: Option<String>,
	#[arg(
		long = "fg",
		value_name = "HEX",
		help = "Initial foreground colour as #rrggbb (default: #ffffff)"
	)]
	pub(crate) foreground: Option<String>,
	#[arg(
		long = "bg",
		value_name = "HEX",
		help = "Initial background colour as #rrggbb (default: #000000)"
	)]
	pub(crate) background: Option<String>,
	#[arg(
		long = "no-mouse",
		help = "Leave the mouse to the terminal; select with Shift+arrows instead (default: disabled)"
	)]
	pub(crate) no_mouse: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long,
		conflicts_with = "emit",
		help = "Render the starting text as a fenced ansi block and exit without the UI"
	)]
	pub(crate) print: bool,
	#[arg(
		short = 'e',
		long,
		help = "Print the last generated block after the UI exits (default: disabled)"
	)]
	pub(crate) emit: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
