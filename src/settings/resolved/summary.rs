use std::time::Duration;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let composer = &config.composer;
	let swatches = config
		.ui
		.swatches
		.iter()
		.map(|swatch| swatch.as_str())
		.collect::<Vec<_>>()
		.join(", ");

	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Welcome text: {}", composer.welcome_text),
		format!("  Foreground: {}", composer.foreground),
		format!("  Background: {}", composer.background),
		format!("  Selection debounce: {}", millis(composer.selection_debounce)),
		format!("  Copy streak reset: {}", millis(composer.copy_reset_delay)),
		format!("  Copied flash: {}", millis(composer.copied_flash)),
		format!("  Swatches: {swatches}"),
		format!("  Mouse: {}", bool_to_word(config.ui.mouse)),
	];
	if let Some(text) = &composer.initial_text {
		lines.push(format!("  Starting text: {} chars", text.chars().count()));
	}
	lines
}

fn millis(duration: Duration) -> String {
	format!("{}ms", duration.as_millis())
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
