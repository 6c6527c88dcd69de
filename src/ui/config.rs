use crate::composer::{ComposerOptions, HexColor};

/// Colours offered by both pickers unless configured otherwise.
pub const DEFAULT_SWATCHES: [&str; 8] = [
	"#ffffff", "#000000", "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#00ffff", "#ff00ff",
];

/// Presentation settings for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub swatches: Vec<HexColor>,
	pub mouse: bool,
}

impl UiConfig {
	#[must_use]
	pub fn default_swatches() -> Vec<HexColor> {
		DEFAULT_SWATCHES
			.iter()
			.filter_map(|hex| HexColor::parse(hex).ok())
			.collect()
	}
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			swatches: Self::default_swatches(),
			mouse: true,
		}
	}
}

/// Everything needed to start an interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
	pub composer: ComposerOptions,
	pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_swatches_all_parse() {
		let swatches = UiConfig::default_swatches();
		assert_eq!(swatches.len(), DEFAULT_SWATCHES.len());
		assert_eq!(swatches[0], HexColor::white());
		assert_eq!(swatches[1], HexColor::black());
	}
}
