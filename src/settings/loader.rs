use std::io::{self, Read};

use anyhow::{Context, Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// `--text` value that asks for the starting text on stdin.
const STDIN_MARKER: &str = "-";

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	let mut resolved = raw.resolve(cli)?;
	resolved.composer.initial_text = initial_text(cli.text.as_deref(), io::stdin().lock())?;
	Ok(resolved)
}

/// Starting text from `--text`, reading `reader` when the value is `-`.
/// A single trailing newline from the stream is dropped.
fn initial_text(text: Option<&str>, mut reader: impl Read) -> Result<Option<String>> {
	match text {
		Some(STDIN_MARKER) => {
			let mut buffer = String::new();
			reader
				.read_to_string(&mut buffer)
				.context("failed to read starting text from stdin")?;
			if buffer.ends_with('\n') {
				buffer.pop();
				if buffer.ends_with('\r') {
					buffer.pop();
				}
			}
			Ok(Some(buffer))
		}
		Some(text) => Ok(Some(text.to_string())),
		None => Ok(None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn literal_text_is_used_verbatim() {
		let text = initial_text(Some("hello"), io::empty()).expect("text");
		assert_eq!(text.as_deref(), Some("hello"));
	}

	#[test]
	fn dash_reads_stream_and_drops_final_newline() {
		let text = initial_text(Some("-"), "line one\nline two\n".as_bytes()).expect("text");
		assert_eq!(text.as_deref(), Some("line one\nline two"));
	}

	#[test]
	fn no_text_leaves_welcome_in_place() {
		assert_eq!(initial_text(None, io::empty()).expect("text"), None);
	}
}
