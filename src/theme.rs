//! Visual theming for the portfolio effects.
//!
//! Colors and per-effect style bundles. Both canvases (starfield and node
//! map) share the same deep-sky background so page transitions read as one
//! scene.

use crate::components::starfield::StarKind;

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

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Accent color shared by the marquee, map strokes, and contact stars.
pub const ACCENT: Color = Color::rgb(102, 204, 255);

/// Canvas background fill, optionally a radial gradient from the center.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
	pub color_secondary: Color,
	pub use_gradient: bool,
}

impl Default for BackgroundStyle {
	fn default() -> Self {
		Self {
			color: Color::rgb(8, 8, 20),
			color_secondary: Color::rgb(16, 16, 40),
			use_gradient: true,
		}
	}
}

/// Per-kind colors for interactive stars.
#[derive(Clone, Debug)]
pub struct StarPalette {
	pub contact: Color,
	pub tech: Color,
	pub project: Color,
	pub achievement: Color,
	pub other: Color,
}

impl Default for StarPalette {
	fn default() -> Self {
		Self {
			contact: ACCENT,
			tech: Color::rgb(255, 204, 102),
			project: Color::rgb(255, 102, 102),
			achievement: Color::rgb(102, 255, 102),
			other: Color::rgb(170, 170, 170),
		}
	}
}

/// Meteor trail and head styling.
#[derive(Clone, Debug)]
pub struct MeteorStyle {
	pub color: Color,
	pub head_radius: f64,
	pub head_blur: f64,
	/// Line width of the newest trail segment; older segments taper to zero.
	pub max_line_width: f64,
}

impl Default for MeteorStyle {
	fn default() -> Self {
		Self {
			color: Color::rgb(255, 255, 255),
			head_radius: 2.0,
			head_blur: 8.0,
			max_line_width: 3.0,
		}
	}
}

/// Complete starfield look.
#[derive(Clone, Debug, Default)]
pub struct StarfieldTheme {
	pub background: BackgroundStyle,
	pub palette: StarPalette,
	pub meteor: MeteorStyle,
	pub detail: StarfieldDetail,
}

/// Fixed visual constants of the starfield that are not per-kind.
#[derive(Clone, Debug)]
pub struct StarfieldDetail {
	pub background_star: Color,
	/// Shadow blur radius at full glow intensity.
	pub glow_blur: f64,
	/// Bright core drawn inside an active star.
	pub core: Color,
	pub core_alpha: f64,
}

impl Default for StarfieldDetail {
	fn default() -> Self {
		Self {
			background_star: Color::rgb(255, 255, 255),
			glow_blur: 25.0,
			core: Color::rgb(255, 255, 255),
			core_alpha: 0.8,
		}
	}
}

impl StarfieldTheme {
	/// Color of an interactive star by record kind.
	pub fn star_color(&self, kind: StarKind) -> Color {
		match kind {
			StarKind::Contact => self.palette.contact,
			StarKind::Tech => self.palette.tech,
			StarKind::Project => self.palette.project,
			StarKind::Achievement => self.palette.achievement,
			StarKind::Other => self.palette.other,
		}
	}
}

/// Node map look: outlined circles joined by plain strokes.
#[derive(Clone, Debug)]
pub struct MapTheme {
	pub background: BackgroundStyle,
	pub link: Color,
	pub link_width: f64,
	pub node_fill: Color,
	pub node_stroke: Color,
	pub node_stroke_width: f64,
	pub node_radius: f64,
	pub label: Color,
	pub label_font: String,
}

impl Default for MapTheme {
	fn default() -> Self {
		Self {
			background: BackgroundStyle::default(),
			link: ACCENT,
			link_width: 2.0,
			node_fill: Color::rgb(10, 10, 26),
			node_stroke: ACCENT,
			node_stroke_width: 2.0,
			node_radius: 20.0,
			label: ACCENT,
			label_font: "14px 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif".to_string(),
		}
	}
}

/// Marquee text styling and scroll speed (pixels per frame).
#[derive(Clone, Debug)]
pub struct MarqueeStyle {
	pub color: Color,
	pub font: String,
	pub speed: f64,
}

impl Default for MarqueeStyle {
	fn default() -> Self {
		Self {
			color: ACCENT.with_alpha(0.3),
			font: "24px 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif".to_string(),
			speed: 1.0,
		}
	}
}
