use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use discolor::app_dirs;

use crate::cli::CliArgs;

/// Prefix shared by every configuration environment variable.
pub(super) const ENV_PREFIX: &str = "DISCOLOR";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(environment());

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// `DISCOLOR__SECTION__KEY` variables; only the swatch list is split on commas.
pub(super) fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.separator("__")
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("ui.swatches")
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".discolor.toml"));
		files.push(current_dir.join("discolor.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".discolor.toml")));
		assert!(files.iter().any(|path| path.ends_with("discolor.toml")));
	}

	#[test]
	fn explicit_config_file_is_merged() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("custom.toml");
		fs::write(&path, "[composer]\nforeground = \"#123456\"\n").expect("write config");

		let path = path.to_str().expect("utf-8 temp path");
		let cli = CliArgs::parse_from(["discolor", "--no-config", "--config", path]);
		let config = build_config(&cli).expect("config builds");
		assert_eq!(
			config.get_string("composer.foreground").expect("key present"),
			"#123456"
		);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("absent.toml");
		let path = path.to_str().expect("utf-8 temp path");
		let cli = CliArgs::parse_from(["discolor", "--no-config", "--config", path]);
		assert!(build_config(&cli).is_err());
	}
}
