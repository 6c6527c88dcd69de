mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use discolor::{ComposeOutcome, Composer, ComposerOptions, logging};
use settings::ResolvedConfig;
use tracing::{info, warn};

fn main() -> Result<()> {
	let cli = parse_cli();

	match logging::initialize() {
		Ok(path) => info!(path = %path.display(), "logging initialised"),
		Err(err) => eprintln!("warning: logging disabled: {err:#}"),
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.print {
		return print_outcome(cli.output, &render_headless(resolved.composer));
	}

	let outcome = run_session(resolved)?;
	if cli.emit {
		print_outcome(cli.output, &outcome)?;
	}

	Ok(())
}

/// Run the interactive composer until the user quits.
fn run_session(settings: ResolvedConfig) -> Result<ComposeOutcome> {
	let outcome = discolor::run(settings.into_session())?;
	if outcome.rendered.is_none() {
		warn!("session ended without generating formatted text");
	}
	Ok(outcome)
}

/// Render the starting buffer without opening the UI.
fn render_headless(options: ComposerOptions) -> ComposeOutcome {
	let mut composer = Composer::new(options);
	let rendered = composer.generate().to_string();
	ComposeOutcome {
		buffer: composer.buffer().to_string(),
		rendered: Some(rendered),
	}
}

fn print_outcome(format: OutputFormat, outcome: &ComposeOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn headless_render_fences_starting_text() {
		let outcome = render_headless(ComposerOptions {
			initial_text: Some("hi".into()),
			..ComposerOptions::default()
		});
		assert_eq!(outcome.buffer, "hi");
		assert_eq!(outcome.rendered.as_deref(), Some("```ansi\nhi\n```"));
	}
}
