use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if config.composer.copy_reset_delay.is_zero() {
		return Err(ConfigError::invalid(
			"timing.copy_reset_ms",
			"0",
			sources.copy_reset.clone(),
			"must be greater than zero",
		));
	}

	if config.composer.copied_flash.is_zero() {
		return Err(ConfigError::invalid(
			"timing.copied_flash_ms",
			"0",
			sources.copied_flash.clone(),
			"must be greater than zero",
		));
	}

	if config.ui.swatches.is_empty() {
		return Err(ConfigError::invalid(
			"ui.swatches",
			"[]",
			sources.swatches.clone(),
			"must list at least one colour",
		));
	}

	Ok(())
}
