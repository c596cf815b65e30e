//! Meteors: a small fixed pool of ambient streaks plus ephemeral click
//! bursts, both sharing the same trail rendering.

use std::collections::VecDeque;

use rand::Rng;

/// Longest trail kept per meteor; the oldest point is evicted first.
pub const MAX_TRAIL: usize = 12;
/// Meteors spawn this far outside the visible canvas.
pub const SPAWN_MARGIN: f64 = 100.0;
/// A pooled meteor respawns once it drifts this far outside the canvas.
pub const EXIT_MARGIN: f64 = 200.0;
/// Click bursts fade fast and are never respawned.
const BURST_FADE_RATE: f64 = 0.05;

/// One recorded trail position with its display opacity.
#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
	pub x: f64,
	pub y: f64,
	pub opacity: f64,
}

/// A streaking particle with a fading trail.
///
/// Pooled meteors live forever and respawn via [`Meteor::reset`]; ephemeral
/// burst meteors are dropped by the owner once fully faded.
#[derive(Clone, Debug)]
pub struct Meteor {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub opacity: f64,
	pub fade_rate: f64,
	pub trail: VecDeque<TrailPoint>,
	pub ephemeral: bool,
}

impl Meteor {
	/// Create a pooled meteor already placed on a spawn band.
	pub fn spawn(width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let mut meteor = Self {
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			opacity: 1.0,
			fade_rate: 0.0,
			trail: VecDeque::with_capacity(MAX_TRAIL),
			ephemeral: false,
		};
		meteor.reset(width, height, rng);
		meteor
	}

	/// Create an ephemeral burst fragment launched from a click point.
	pub fn burst(x: f64, y: f64, angle: f64, speed: f64) -> Self {
		let mut trail = VecDeque::with_capacity(MAX_TRAIL);
		trail.push_back(TrailPoint { x, y, opacity: 1.0 });
		Self {
			x,
			y,
			vx: angle.cos() * speed,
			vy: angle.sin() * speed,
			opacity: 1.0,
			fade_rate: BURST_FADE_RATE,
			trail,
			ephemeral: true,
		}
	}

	/// Respawn just outside a uniformly chosen viewport edge, velocity
	/// pointing inward. Reuses the instance; the trail is cleared.
	pub fn reset(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
		match rng.gen_range(0..4u8) {
			// Top
			0 => {
				self.x = rng.gen_range(-SPAWN_MARGIN..width + SPAWN_MARGIN);
				self.y = -SPAWN_MARGIN;
				self.vx = rng.gen_range(-2.0..2.0);
				self.vy = rng.gen_range(3.0..8.0);
			}
			// Right
			1 => {
				self.x = width + SPAWN_MARGIN;
				self.y = rng.gen_range(-SPAWN_MARGIN..height + SPAWN_MARGIN);
				self.vx = rng.gen_range(-8.0..-3.0);
				self.vy = rng.gen_range(-2.0..2.0);
			}
			// Bottom
			2 => {
				self.x = rng.gen_range(-SPAWN_MARGIN..width + SPAWN_MARGIN);
				self.y = height + SPAWN_MARGIN;
				self.vx = rng.gen_range(-2.0..2.0);
				self.vy = rng.gen_range(-8.0..-3.0);
			}
			// Left
			_ => {
				self.x = -SPAWN_MARGIN;
				self.y = rng.gen_range(-SPAWN_MARGIN..height + SPAWN_MARGIN);
				self.vx = rng.gen_range(3.0..8.0);
				self.vy = rng.gen_range(-2.0..2.0);
			}
		}

		self.opacity = 1.0;
		self.fade_rate = rng.gen_range(0.003..0.008);
		self.trail.clear();
	}

	/// Integrate one frame: move, extend the trail, recompute the opacity
	/// gradient over the whole trail, fade, and respawn pooled meteors that
	/// left the bounds or fully faded.
	pub fn update(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
		self.x += self.vx;
		self.y += self.vy;

		self.trail.push_back(TrailPoint {
			x: self.x,
			y: self.y,
			opacity: self.opacity,
		});
		if self.trail.len() > MAX_TRAIL {
			self.trail.pop_front();
		}

		// The gradient spans the whole trail and is recomputed every frame;
		// points do not decay individually.
		let len = self.trail.len();
		for (i, point) in self.trail.iter_mut().enumerate() {
			point.opacity = (i as f64 / len as f64) * self.opacity * 0.8;
		}

		self.opacity -= self.fade_rate;

		if !self.ephemeral && (self.out_of_bounds(width, height) || self.opacity <= 0.0) {
			self.reset(width, height, rng);
		}
	}

	/// Whether this meteor still contributes to the scene. Ephemeral
	/// meteors are removed by the owner once this turns false.
	pub fn alive(&self) -> bool {
		self.opacity > 0.0
	}

	fn out_of_bounds(&self, width: f64, height: f64) -> bool {
		self.x < -EXIT_MARGIN
			|| self.x > width + EXIT_MARGIN
			|| self.y < -EXIT_MARGIN
			|| self.y > height + EXIT_MARGIN
	}
}
