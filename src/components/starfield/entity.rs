//! Scene entities: ambient background stars and the interactive stars built
//! from descriptor records.
//!
//! All easing here is per-frame (no delta time): `value += (target - value)
//! * k` applied once per animation frame, matching the original effect's
//! frame-rate-dependent feel.

use std::f64::consts::TAU;

use rand::Rng;

use super::types::StarRecord;

/// Radius multiplier applied while a star is hovered or pinned.
pub const HOVER_SCALE: f64 = 2.5;
/// Per-frame easing factor for radius and glow transitions.
const EASE: f64 = 0.15;
/// Padding added to the visual radius when hit-testing.
pub const HIT_PADDING: f64 = 15.0;
/// Hit area never shrinks below this radius, so tiny stars stay clickable.
pub const MIN_HIT_RADIUS: f64 = 20.0;

/// A clickable star derived from one [`StarRecord`].
///
/// Created once at load time and only repositioned on resize; fractional
/// record coordinates are the source of truth for placement.
#[derive(Clone, Debug)]
pub struct InteractiveStar {
	pub record: StarRecord,
	pub x: f64,
	pub y: f64,
	pub base_radius: f64,
	pub radius: f64,
	pub glow: f64,
	pub hovered: bool,
	target_radius: f64,
	target_glow: f64,
	phase: f64,
	phase_speed: f64,
}

impl InteractiveStar {
	pub fn new(record: StarRecord, width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let base_radius = record.kind.base_radius();
		let mut star = Self {
			record,
			x: 0.0,
			y: 0.0,
			base_radius,
			radius: base_radius,
			glow: 0.0,
			hovered: false,
			target_radius: base_radius,
			target_glow: 0.0,
			phase: rng.gen_range(0.0..TAU),
			phase_speed: rng.gen_range(0.01..0.03),
		};
		star.reposition(width, height);
		star
	}

	/// Recompute the absolute position from fractional record coordinates.
	pub fn reposition(&mut self, width: f64, height: f64) {
		self.x = self.record.x * width;
		self.y = self.record.y * height;
	}

	/// Advance the twinkle oscillator and ease radius/glow toward the
	/// targets for the given activity state.
	pub fn update(&mut self, active: bool) {
		self.phase += self.phase_speed;

		(self.target_radius, self.target_glow) = if active {
			(self.base_radius * HOVER_SCALE, 1.0)
		} else {
			(self.base_radius, 0.0)
		};

		self.radius += (self.target_radius - self.radius) * EASE;
		self.glow += (self.target_glow - self.glow) * EASE;
	}

	/// Inclusive circular hit test against the enlarged click area.
	pub fn hit_test(&self, px: f64, py: f64) -> bool {
		let (dx, dy) = (px - self.x, py - self.y);
		let hit_radius = (self.radius + HIT_PADDING).max(MIN_HIT_RADIUS);
		dx * dx + dy * dy <= hit_radius * hit_radius
	}

	/// Current twinkle brightness in `[0.4, 1.0]`.
	pub fn twinkle_alpha(&self) -> f64 {
		self.phase.sin() * 0.3 + 0.7
	}
}

/// A non-interactive twinkling dot. Regenerated wholesale on resize.
#[derive(Clone, Debug)]
pub struct BackgroundStar {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	opacity: f64,
	phase: f64,
	phase_speed: f64,
}

impl BackgroundStar {
	pub fn new(width: f64, height: f64, rng: &mut impl Rng) -> Self {
		Self {
			x: rng.gen_range(0.0..width.max(1.0)),
			y: rng.gen_range(0.0..height.max(1.0)),
			radius: rng.gen_range(0.5..1.5),
			opacity: rng.gen_range(0.3..0.8),
			phase: rng.gen_range(0.0..TAU),
			phase_speed: rng.gen_range(0.005..0.02),
		}
	}

	pub fn update(&mut self) {
		self.phase += self.phase_speed;
	}

	/// Base opacity modulated by the twinkle oscillator.
	pub fn twinkle_alpha(&self) -> f64 {
		(self.phase.sin() * 0.4 + 0.6) * self.opacity
	}
}
