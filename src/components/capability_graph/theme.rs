//! Visual theming for the capability map.
//!
//! Provides the color type, the categorical group palette, and per-element
//! style configuration including the highlighted/faded treatments.

use std::collections::HashMap;

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A curated color palette for node groups.
#[derive(Clone, Debug)]
pub struct NodePalette {
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// The classic ten-color categorical scheme (default).
	pub fn category10() -> Self {
		Self {
			colors: vec![
				Color::rgb(0x1f, 0x77, 0xb4), // Blue
				Color::rgb(0xff, 0x7f, 0x0e), // Orange
				Color::rgb(0x2c, 0xa0, 0x2c), // Green
				Color::rgb(0xd6, 0x27, 0x28), // Red
				Color::rgb(0x94, 0x67, 0xbd), // Purple
				Color::rgb(0x8c, 0x56, 0x4b), // Brown
				Color::rgb(0xe3, 0x77, 0xc2), // Pink
				Color::rgb(0x7f, 0x7f, 0x7f), // Gray
				Color::rgb(0xbc, 0xbd, 0x22), // Olive
				Color::rgb(0x17, 0xbe, 0xcf), // Cyan
			],
		}
	}

	/// Muted, harmonious palette - slate blues and teals.
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(129, 161, 193), // Light steel
				Color::rgb(100, 148, 160), // Teal gray
				Color::rgb(136, 160, 175), // Cadet blue
				Color::rgb(108, 142, 173), // Air force blue
				Color::rgb(119, 158, 165), // Desaturated cyan
				Color::rgb(143, 163, 180), // Cool gray
				Color::rgb(122, 153, 168), // Dusty blue
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Assigns palette colors to categorical keys in order of first appearance.
///
/// Repeat keys always map to the same slot, so group colors are stable for
/// the session.
#[derive(Clone, Debug)]
pub struct OrdinalScale {
	palette: NodePalette,
	slots: HashMap<String, usize>,
}

impl OrdinalScale {
	pub fn new(palette: NodePalette) -> Self {
		Self {
			palette,
			slots: HashMap::new(),
		}
	}

	/// Color for a categorical key, assigning the next free palette slot on
	/// first sight.
	pub fn color(&mut self, key: &str) -> Color {
		let next = self.slots.len();
		let slot = *self.slots.entry(key.to_string()).or_insert(next);
		self.palette.get(slot)
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Base edge color
	pub color: Color,
	/// Stroke for edges incident to the focused node
	pub highlight_color: Color,
	/// Alpha multiplier for faded edges
	pub faded_alpha: f64,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	/// Border color
	pub border_color: Color,
	/// Border for nodes in the focused neighborhood
	pub highlight_border_color: Color,
	/// Alpha multiplier for faded nodes
	pub faded_alpha: f64,
}

/// Label visual style.
#[derive(Clone, Debug)]
pub struct LabelStyle {
	/// Base label color
	pub color: Color,
	/// Label color inside the focused neighborhood
	pub highlight_color: Color,
	/// Alpha multiplier for faded labels
	pub faded_alpha: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
	pub label: LabelStyle,
	pub palette: NodePalette,
}

impl Theme {
	/// Light dashboard theme (default).
	pub fn light() -> Self {
		Self {
			name: "light",
			background: BackgroundStyle {
				color: Color::rgb(255, 255, 255),
				color_secondary: Color::rgb(245, 246, 248),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(170, 170, 170, 0.6),
				highlight_color: Color::rgba(80, 100, 130, 0.95),
				faded_alpha: 0.15,
			},
			node: NodeStyle {
				use_gradient: false,
				border_width: 1.5,
				border_color: Color::rgb(255, 255, 255),
				highlight_border_color: Color::rgb(40, 55, 75),
				faded_alpha: 0.15,
			},
			label: LabelStyle {
				color: Color::rgb(51, 51, 51),
				highlight_color: Color::rgb(20, 20, 20),
				faded_alpha: 0.2,
			},
			palette: NodePalette::category10(),
		}
	}

	/// Elegant dark variant.
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(18, 20, 28),
				color_secondary: Color::rgb(25, 28, 38),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(100, 120, 150, 0.45),
				highlight_color: Color::rgba(180, 200, 230, 0.9),
				faded_alpha: 0.15,
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 1.0,
				border_color: Color::rgba(255, 255, 255, 0.35),
				highlight_border_color: Color::rgba(255, 255, 255, 0.9),
				faded_alpha: 0.2,
			},
			label: LabelStyle {
				color: Color::rgba(235, 238, 245, 0.85),
				highlight_color: Color::rgb(255, 255, 255),
				faded_alpha: 0.2,
			},
			palette: NodePalette::slate(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ordinal_scale_assigns_slots_in_first_appearance_order() {
		let mut scale = OrdinalScale::new(NodePalette::category10());
		let first = scale.color("ops");
		let second = scale.color("strategy");
		let repeat = scale.color("ops");
		assert_eq!(first.to_css(), NodePalette::category10().get(0).to_css());
		assert_eq!(second.to_css(), NodePalette::category10().get(1).to_css());
		assert_eq!(repeat.to_css(), first.to_css());
	}

	#[test]
	fn palette_wraps_past_its_length() {
		let palette = NodePalette::category10();
		assert_eq!(palette.get(0).to_css(), palette.get(10).to_css());
	}

	#[test]
	fn css_output_uses_hex_for_opaque_and_rgba_otherwise() {
		assert_eq!(Color::rgb(0x1f, 0x77, 0xb4).to_css(), "#1f77b4");
		assert_eq!(Color::rgba(10, 20, 30, 0.5).to_css(), "rgba(10, 20, 30, 0.5)");
	}
}
