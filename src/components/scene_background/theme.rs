//! Visual theming for the background scene.
//!
//! The scene never owns the light/dark flag. It maps a [`ThemeMode`] onto the
//! material attributes each layer draws with, so switching themes touches
//! colors, opacity and blending only.

/// Class token on `document.body` that marks the light theme.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

/// Number of entries in a flow-field palette.
pub const PALETTE_SIZE: usize = 4;

/// sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Builds a color from its three channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Builds a color from a packed `0xRRGGBB` value.
	pub const fn hex(value: u32) -> Self {
		Self {
			r: ((value >> 16) & 0xff) as u8,
			g: ((value >> 8) & 0xff) as u8,
			b: (value & 0xff) as u8,
		}
	}

	/// Channels scaled to `0.0..=1.0`, the layout of the color buffers.
	pub fn to_unit(self) -> [f32; 3] {
		[
			self.r as f32 / 255.0,
			self.g as f32 / 255.0,
			self.b as f32 / 255.0,
		]
	}

	/// `#rrggbb` string for canvas styles.
	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Light or dark page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
	/// `light-theme` class present.
	Light,
	/// No class; the page default.
	#[default]
	Dark,
}

impl ThemeMode {
	/// Maps the presence of the light class to a mode.
	pub fn from_is_light(is_light: bool) -> Self {
		if is_light { Self::Light } else { Self::Dark }
	}

	/// `true` for [`ThemeMode::Light`].
	pub fn is_light(self) -> bool {
		self == Self::Light
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}
}

/// How a layer composites onto what is already drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blending {
	/// Paint over what is below.
	Normal,
	/// Add to what is below, brightening overlaps.
	Additive,
}

impl Blending {
	/// Canvas `globalCompositeOperation` value for this mode.
	pub fn composite_operation(self) -> &'static str {
		match self {
			Blending::Normal => "source-over",
			Blending::Additive => "lighter",
		}
	}
}

/// Single-color point material (starfield).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMaterial {
	/// Fill color of every point.
	pub color: Color,
	/// Layer alpha, `0.0..=1.0`.
	pub opacity: f64,
}

/// Vertex-colored point material (flow field).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowMaterial {
	/// Colors indexed by each particle's palette slot.
	pub palette: [Color; PALETTE_SIZE],
	/// Layer alpha, `0.0..=1.0`.
	pub opacity: f64,
	/// Compositing mode of the layer.
	pub blending: Blending,
}

/// Line material shared by prism wireframes and network links.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMaterial {
	/// Stroke color.
	pub color: Color,
	/// Stroke alpha. Zero hides the lines.
	pub opacity: f64,
}

/// Every appearance attribute the theme controls.
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
	/// Mode these materials were built for.
	pub mode: ThemeMode,
	/// Starfield material.
	pub stars: PointMaterial,
	/// Flow-field material.
	pub flow: FlowMaterial,
	/// Prism wireframe material.
	pub prisms: LineMaterial,
	/// Network line material.
	pub links: LineMaterial,
}

impl Appearance {
	/// Materials for `mode`.
	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Light => Self::light(),
			ThemeMode::Dark => Self::dark(),
		}
	}

	/// Indigo-on-paper look used by the light theme.
	pub fn light() -> Self {
		Self {
			mode: ThemeMode::Light,
			stars: PointMaterial {
				color: Color::hex(0x6366f1),
				opacity: 0.2,
			},
			flow: FlowMaterial {
				palette: [
					Color::hex(0x6366f1), // Indigo
					Color::hex(0x4f46e5), // Deep indigo
					Color::hex(0x0ea5e9), // Ocean blue
					Color::hex(0x64748b), // Slate
				],
				opacity: 0.6,
				blending: Blending::Normal,
			},
			prisms: LineMaterial {
				color: Color::hex(0x4f46e5),
				opacity: 0.2,
			},
			links: LineMaterial {
				color: Color::hex(0x6366f1),
				opacity: 0.15,
			},
		}
	}

	/// Glowing nebula look used by the dark theme.
	pub fn dark() -> Self {
		Self {
			mode: ThemeMode::Dark,
			stars: PointMaterial {
				color: Color::hex(0xffffff),
				opacity: 0.5,
			},
			flow: FlowMaterial {
				palette: [
					Color::hex(0x6366f1), // Indigo
					Color::hex(0x8b5cf6), // Purple
					Color::hex(0xd946ef), // Fuchsia
					Color::hex(0x0ea5e9), // Sky
				],
				opacity: 0.4,
				blending: Blending::Additive,
			},
			prisms: LineMaterial {
				color: Color::hex(0x8b5cf6),
				opacity: 0.1,
			},
			links: LineMaterial {
				color: Color::hex(0x6366f1),
				opacity: 0.0,
			},
		}
	}
}

/// Reads the current theme from wherever the page keeps it.
pub trait ThemeSource {
	/// The mode in effect right now.
	fn current(&self) -> ThemeMode;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_unpacks_channels() {
		let c = Color::hex(0x6366f1);
		assert_eq!(c, Color::rgb(0x63, 0x66, 0xf1));
		assert_eq!(c.to_css(), "#6366f1");
	}

	#[test]
	fn unit_channels_span_zero_to_one() {
		assert_eq!(Color::hex(0xffffff).to_unit(), [1.0, 1.0, 1.0]);
		assert_eq!(Color::hex(0x000000).to_unit(), [0.0, 0.0, 0.0]);
	}

	#[test]
	fn toggling_twice_returns_to_start() {
		assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
		assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
		assert!(ThemeMode::from_is_light(true).is_light());
	}

	#[test]
	fn themes_differ_only_in_appearance() {
		let (light, dark) = (Appearance::light(), Appearance::dark());
		assert_eq!(light.flow.blending, Blending::Normal);
		assert_eq!(dark.flow.blending, Blending::Additive);
		assert!(light.links.opacity > 0.0);
		assert_eq!(dark.links.opacity, 0.0);
		assert_eq!(Appearance::for_mode(ThemeMode::Dark), dark);
	}
}
