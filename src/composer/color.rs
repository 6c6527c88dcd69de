use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors raised while parsing a `#RRGGBB` colour string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
	#[error("colour must start with '#': {0:?}")]
	MissingHash(String),
	#[error("colour must have exactly six hex digits: {0:?}")]
	Length(String),
	#[error("colour contains a non-hex digit: {0:?}")]
	Digit(String),
}

/// A red/green/blue triple, each component in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<Rgb> for ratatui::style::Color {
	fn from(rgb: Rgb) -> Self {
		ratatui::style::Color::Rgb(rgb.r, rgb.g, rgb.b)
	}
}

/// A 24-bit colour stored in its `#rrggbb` form.
///
/// Construction always goes through [`HexColor::parse`], so a value of this
/// type is well formed and [`HexColor::rgb`] cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
	/// Pure white, the default foreground.
	pub fn white() -> Self {
		Self("#ffffff".to_string())
	}

	/// Pure black, the default background.
	pub fn black() -> Self {
		Self("#000000".to_string())
	}

	/// Parse a `#RRGGBB` string. Hex digits may be either case.
	pub fn parse(input: &str) -> Result<Self, ColorError> {
		let trimmed = input.trim();
		let Some(digits) = trimmed.strip_prefix('#') else {
			return Err(ColorError::MissingHash(input.to_string()));
		};
		if digits.len() != 6 {
			return Err(ColorError::Length(input.to_string()));
		}
		if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
			return Err(ColorError::Digit(input.to_string()));
		}
		Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Split the two-digit segments into decimal components.
	pub fn rgb(&self) -> Rgb {
		Rgb {
			r: self.component(1),
			g: self.component(3),
			b: self.component(5),
		}
	}

	fn component(&self, start: usize) -> u8 {
		// Validated in `parse`; the fallback is unreachable.
		u8::from_str_radix(&self.0[start..start + 2], 16).unwrap_or_default()
	}
}

impl Default for HexColor {
	fn default() -> Self {
		Self::white()
	}
}

impl fmt::Display for HexColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for HexColor {
	type Err = ColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl<'de> Deserialize<'de> for HexColor {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;
		Self::parse(&raw).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rgb(hex: &str) -> (u8, u8, u8) {
		let Rgb { r, g, b } = HexColor::parse(hex).unwrap().rgb();
		(r, g, b)
	}

	#[test]
	fn parses_primary_and_extreme_colours() {
		assert_eq!(rgb("#ff0000"), (255, 0, 0));
		assert_eq!(rgb("#000000"), (0, 0, 0));
		assert_eq!(rgb("#ffffff"), (255, 255, 255));
		assert_eq!(rgb("#1a2B3c"), (26, 43, 60));
	}

	#[test]
	fn stores_lowercase_form() {
		assert_eq!(HexColor::parse("#ABCDEF").unwrap().as_str(), "#abcdef");
		assert_eq!(HexColor::parse(" #00FF00 ").unwrap().to_string(), "#00ff00");
	}

	#[test]
	fn rejects_malformed_input() {
		assert!(matches!(
			HexColor::parse("ff0000"),
			Err(ColorError::MissingHash(_))
		));
		assert!(matches!(HexColor::parse("#fff"), Err(ColorError::Length(_))));
		assert!(matches!(HexColor::parse("#gg0000"), Err(ColorError::Digit(_))));
	}

	#[test]
	fn defaults_match_picker_defaults() {
		assert_eq!(HexColor::white().rgb(), Rgb { r: 255, g: 255, b: 255 });
		assert_eq!(HexColor::black().rgb(), Rgb { r: 0, g: 0, b: 0 });
	}
}
