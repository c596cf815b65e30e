//! Starfield scene state: entities plus the pointer machine.
//!
//! Created once when the component mounts, then mutated each frame by the
//! animation loop and between frames by pointer events. Holds no browser
//! handles, so the full interaction surface is testable on the host.

use std::f64::consts::TAU;

use rand::Rng;
use rand::rngs::SmallRng;

use super::entity::{BackgroundStar, InteractiveStar};
use super::meteor::Meteor;
use super::pointer::{PointerState, PointerUpdate};
use super::types::StarRecord;

/// Ambient dots regenerated on every resize.
pub const BACKGROUND_STAR_COUNT: usize = 150;
/// Pooled meteors alive at all times.
pub const METEOR_COUNT: usize = 3;
/// Fragments launched per click burst.
pub const BURST_SIZE: usize = 8;

/// The whole starfield scene.
pub struct StarfieldState {
	pub stars: Vec<InteractiveStar>,
	pub background: Vec<BackgroundStar>,
	pub meteors: Vec<Meteor>,
	pub pointer: PointerState,
	pub width: f64,
	pub height: f64,
	rng: SmallRng,
}

impl StarfieldState {
	pub fn new(records: Vec<StarRecord>, width: f64, height: f64, mut rng: SmallRng) -> Self {
		let stars = records
			.into_iter()
			.map(|record| InteractiveStar::new(record, width, height, &mut rng))
			.collect();
		let background = (0..BACKGROUND_STAR_COUNT)
			.map(|_| BackgroundStar::new(width, height, &mut rng))
			.collect();
		let meteors = (0..METEOR_COUNT)
			.map(|_| Meteor::spawn(width, height, &mut rng))
			.collect();

		Self {
			stars,
			background,
			meteors,
			pointer: PointerState::default(),
			width,
			height,
			rng,
		}
	}

	/// Advance every entity by one frame and drop spent burst meteors.
	pub fn tick(&mut self) {
		for star in &mut self.background {
			star.update();
		}
		for (index, star) in self.stars.iter_mut().enumerate() {
			let active = star.hovered || self.pointer.pinned() == Some(index);
			star.update(active);
		}
		for meteor in &mut self.meteors {
			meteor.update(self.width, self.height, &mut self.rng);
		}
		// Pooled meteors respawned themselves above; only ephemeral burst
		// fragments ever reach zero opacity here.
		self.meteors.retain(Meteor::alive);
	}

	/// Re-layout for a new canvas size: interactive stars keep their state
	/// and move to the new absolute position, background stars regenerate.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		for star in &mut self.stars {
			star.reposition(width, height);
		}
		self.background = (0..BACKGROUND_STAR_COUNT)
			.map(|_| BackgroundStar::new(width, height, &mut self.rng))
			.collect();
	}

	/// Topmost star under the point, if any. When hit areas overlap the
	/// star latest in scan order wins.
	pub fn star_at(&self, x: f64, y: f64) -> Option<usize> {
		let mut found = None;
		for (index, star) in self.stars.iter().enumerate() {
			if star.hit_test(x, y) {
				found = Some(index);
			}
		}
		found
	}

	/// Route a pointer move through the machine and sync hover flags.
	pub fn pointer_moved(&mut self, x: f64, y: f64) -> PointerUpdate {
		if self.pointer.is_pinned() {
			return PointerUpdate::None;
		}
		let hit = self.star_at(x, y);
		self.set_hover_flag(hit);
		self.pointer.pointer_moved(hit)
	}

	/// Pointer left the canvas.
	pub fn pointer_left(&mut self) -> PointerUpdate {
		let update = self.pointer.pointer_left();
		if update == PointerUpdate::Hide {
			self.set_hover_flag(None);
		}
		update
	}

	/// Click on the canvas. Hitting a star pins (or toggles off) its
	/// tooltip and launches a burst; a miss dismisses a pinned tooltip.
	pub fn clicked(&mut self, x: f64, y: f64) -> PointerUpdate {
		let hit = self.star_at(x, y);
		if hit.is_some() {
			self.spawn_burst(x, y);
		}
		let update = self.pointer.clicked(hit);
		match update {
			PointerUpdate::ShowPinned(index) => self.set_hover_flag(Some(index)),
			PointerUpdate::Hide => self.set_hover_flag(None),
			_ => {}
		}
		update
	}

	/// Click landed outside both canvas and tooltip.
	pub fn outside_click(&mut self) -> PointerUpdate {
		let update = self.pointer.outside_click();
		if update == PointerUpdate::Hide {
			self.set_hover_flag(None);
		}
		update
	}

	/// Only one star may hold the hover flag at a time.
	fn set_hover_flag(&mut self, holder: Option<usize>) {
		for (index, star) in self.stars.iter_mut().enumerate() {
			star.hovered = holder == Some(index);
		}
	}

	fn spawn_burst(&mut self, x: f64, y: f64) {
		for i in 0..BURST_SIZE {
			let angle = i as f64 / BURST_SIZE as f64 * TAU;
			let speed = self.rng.gen_range(2.0..5.0);
			self.meteors.push(Meteor::burst(x, y, angle, speed));
		}
	}
}
