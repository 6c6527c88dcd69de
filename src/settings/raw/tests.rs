use std::time::Duration;

use clap::Parser;
use config::{Config, File, FileFormat};
use discolor::HexColor;

use super::RawConfig;
use crate::cli::CliArgs;

fn raw_from_toml(source: &str) -> RawConfig {
	Config::builder()
		.add_source(File::from_str(source, FileFormat::Toml))
		.build()
		.expect("config builds")
		.try_deserialize()
		.expect("config deserializes")
}

fn cli(args: &[&str]) -> CliArgs {
	CliArgs::parse_from(std::iter::once("discolor").chain(args.iter().copied()))
}

#[test]
fn defaults_resolve_to_session_defaults() {
	let cli = cli(&[]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolves");
	assert_eq!(resolved.composer.foreground, HexColor::white());
	assert_eq!(resolved.composer.background, HexColor::black());
	assert_eq!(resolved.composer.copy_reset_delay, Duration::from_millis(2000));
	assert!(resolved.ui.mouse);
}

#[test]
fn file_values_are_applied() {
	let mut raw = raw_from_toml(
		r##"
[composer]
welcome_text = "Hi there"
foreground = "#FF8800"

[timing]
selection_debounce_ms = 250
copy_reset_ms = 500

[ui]
swatches = ["#111111", "#222222"]
mouse = false
"##,
	);
	let cli = cli(&[]);
	raw.apply_cli_overrides(&cli);
	let resolved = raw.resolve(&cli).expect("resolves");

	assert_eq!(resolved.composer.welcome_text, "Hi there");
	assert_eq!(resolved.composer.foreground.as_str(), "#ff8800");
	assert_eq!(resolved.composer.selection_debounce, Duration::from_millis(250));
	assert_eq!(resolved.composer.copy_reset_delay, Duration::from_millis(500));
	assert_eq!(resolved.ui.swatches.len(), 2);
	assert!(!resolved.ui.mouse);
}

#[test]
fn cli_overrides_take_precedence() {
	let mut raw = raw_from_toml("[composer]\nforeground = \"#111111\"\n");
	let cli = cli(&["--fg", "#ABCDEF", "--bg", "#123456", "--no-mouse"]);
	raw.apply_cli_overrides(&cli);
	let resolved = raw.resolve(&cli).expect("resolves");

	assert_eq!(resolved.composer.foreground.as_str(), "#abcdef");
	assert_eq!(resolved.composer.background.as_str(), "#123456");
	assert!(!resolved.ui.mouse);
}

#[test]
fn invalid_cli_colour_names_the_flag() {
	let mut raw = RawConfig::default();
	let cli = cli(&["--fg", "red"]);
	raw.apply_cli_overrides(&cli);

	let err = raw.resolve(&cli).unwrap_err();
	assert_eq!(err.key, "composer.foreground");
	let message = err.to_string();
	assert!(message.contains("CLI flag `--fg`"));
	assert!(message.contains("value: red"));
}

#[test]
fn invalid_swatch_names_the_config_key() {
	let raw = raw_from_toml("[ui]\nswatches = [\"#ffffff\", \"#12345\"]\n");
	let err = raw.resolve(&cli(&[])).unwrap_err();
	assert_eq!(err.key, "ui.swatches");
	assert!(err.to_string().contains("value: #12345"));
}

#[test]
fn zero_copy_reset_is_rejected() {
	let raw = raw_from_toml("[timing]\ncopy_reset_ms = 0\n");
	let err = raw.resolve(&cli(&[])).unwrap_err();
	assert_eq!(err.key, "timing.copy_reset_ms");
}
