use crate::composer::HexColor;

/// Swatches shared by the foreground and background pickers.
#[derive(Debug, Clone, Default)]
pub struct Palette {
	swatches: Vec<HexColor>,
}

impl Palette {
	pub fn new(swatches: Vec<HexColor>) -> Self {
		Self { swatches }
	}

	pub fn swatches(&self) -> &[HexColor] {
		&self.swatches
	}

	pub fn get(&self, index: usize) -> Option<&HexColor> {
		self.swatches.get(index)
	}

	pub fn position(&self, color: &HexColor) -> Option<usize> {
		self.swatches.iter().position(|swatch| swatch == color)
	}

	/// The swatch after `current`, wrapping around. A colour that is not in
	/// the palette advances to the first swatch.
	pub fn next_after(&self, current: &HexColor) -> Option<&HexColor> {
		if self.swatches.is_empty() {
			return None;
		}
		let next = match self.position(current) {
			Some(index) => (index + 1) % self.swatches.len(),
			None => 0,
		};
		self.swatches.get(next)
	}
}
