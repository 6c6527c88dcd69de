use std::env;
use std::time::Duration;

use discolor::{ComposerOptions, HexColor, SessionConfig, UiConfig};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	composer: ComposerSection,
	timing: TimingSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ComposerSection {
	welcome_text: Option<String>,
	foreground: Option<String>,
	background: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TimingSection {
	selection_debounce_ms: Option<u64>,
	copy_reset_ms: Option<u64>,
	copied_flash_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	swatches: Option<Vec<String>>,
	mouse: Option<bool>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(foreground) = &cli.foreground {
			self.composer.foreground = Some(foreground.clone());
		}
		if let Some(background) = &cli.background {
			self.composer.background = Some(background.clone());
		}
		if cli.no_mouse {
			self.ui.mouse = Some(false);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig, ConfigError> {
		let defaults = SessionConfig::default();

		let foreground = resolve_color(
			self.composer.foreground,
			defaults.composer.foreground,
			detect_source(
				cli.foreground.is_some(),
				"DISCOLOR__COMPOSER__FOREGROUND",
				"--fg",
				"composer.foreground",
			),
			"composer.foreground",
		)?;
		let background = resolve_color(
			self.composer.background,
			defaults.composer.background,
			detect_source(
				cli.background.is_some(),
				"DISCOLOR__COMPOSER__BACKGROUND",
				"--bg",
				"composer.background",
			),
			"composer.background",
		)?;

		let swatches = match self.ui.swatches {
			Some(values) => {
				let origin = config_source("DISCOLOR__UI__SWATCHES", "ui.swatches");
				values
					.iter()
					.map(|value| {
						HexColor::parse(value).map_err(|err| {
							ConfigError::invalid(
								"ui.swatches",
								value.as_str(),
								origin.clone(),
								err.to_string(),
							)
						})
					})
					.collect::<Result<Vec<_>, _>>()?
			}
			None => defaults.ui.swatches,
		};

		let composer = ComposerOptions {
			welcome_text: self
				.composer
				.welcome_text
				.unwrap_or(defaults.composer.welcome_text),
			initial_text: None,
			foreground,
			background,
			selection_debounce: millis_or(
				self.timing.selection_debounce_ms,
				defaults.composer.selection_debounce,
			),
			copy_reset_delay: millis_or(self.timing.copy_reset_ms, defaults.composer.copy_reset_delay),
			copied_flash: millis_or(self.timing.copied_flash_ms, defaults.composer.copied_flash),
		};
		let ui = UiConfig {
			swatches,
			mouse: self.ui.mouse.unwrap_or(defaults.ui.mouse),
		};

		let config = ResolvedConfig { composer, ui };
		config.validate(&validation_sources())?;
		Ok(config)
	}
}

fn resolve_color(
	value: Option<String>,
	default: HexColor,
	origin: SettingSource,
	key: &'static str,
) -> Result<HexColor, ConfigError> {
	match value {
		Some(value) => HexColor::parse(&value)
			.map_err(|err| ConfigError::invalid(key, value.as_str(), origin, err.to_string())),
		None => Ok(default),
	}
}

fn millis_or(value: Option<u64>, default: Duration) -> Duration {
	value.map_or(default, Duration::from_millis)
}

fn validation_sources() -> ConfigSources {
	ConfigSources {
		copy_reset: config_source("DISCOLOR__TIMING__COPY_RESET_MS", "timing.copy_reset_ms"),
		copied_flash: config_source("DISCOLOR__TIMING__COPIED_FLASH_MS", "timing.copied_flash_ms"),
		swatches: config_source("DISCOLOR__UI__SWATCHES", "ui.swatches"),
	}
}

fn detect_source(
	cli_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> SettingSource {
	if cli_present {
		return SettingSource::CliFlag(cli_flag);
	}
	config_source(env_var, key)
}

/// Origin of a value that has no CLI flag.
fn config_source(env_var: &'static str, key: &'static str) -> SettingSource {
	if env::var_os(env_var).is_some() {
		return SettingSource::Environment(env_var);
	}

	SettingSource::ConfigKey(key)
}

#[cfg(test)]
mod tests;
