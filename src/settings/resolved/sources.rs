use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where the values checked after resolution came from.
#[derive(Debug, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) copy_reset: SettingSource,
	pub(crate) copied_flash: SettingSource,
	pub(crate) swatches: SettingSource,
}

impl Default for ConfigSources {
	fn default() -> Self {
		Self {
			copy_reset: SettingSource::ConfigKey("timing.copy_reset_ms"),
			copied_flash: SettingSource::ConfigKey("timing.copied_flash_ms"),
			swatches: SettingSource::ConfigKey("ui.swatches"),
		}
	}
}
