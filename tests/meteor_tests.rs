// Host-side tests for the meteor lifecycle.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use star_portfolio::components::starfield::meteor::{
	EXIT_MARGIN, MAX_TRAIL, Meteor, SPAWN_MARGIN,
};

const W: f64 = 800.0;
const H: f64 = 600.0;

/// A freshly reset meteor must sit on one of the four spawn bands with
/// velocity pointing into the canvas.
fn assert_on_spawn_band(meteor: &Meteor) {
	let top = meteor.y == -SPAWN_MARGIN && meteor.vy > 0.0;
	let right = meteor.x == W + SPAWN_MARGIN && meteor.vx < 0.0;
	let bottom = meteor.y == H + SPAWN_MARGIN && meteor.vy < 0.0;
	let left = meteor.x == -SPAWN_MARGIN && meteor.vx > 0.0;
	assert!(
		top || right || bottom || left,
		"meteor at ({}, {}) with velocity ({}, {})",
		meteor.x,
		meteor.y,
		meteor.vx,
		meteor.vy
	);
}

#[test]
fn spawns_outside_bounds_with_inward_velocity() {
	let mut rng = SmallRng::seed_from_u64(1);
	for _ in 0..200 {
		let meteor = Meteor::spawn(W, H, &mut rng);
		assert_on_spawn_band(&meteor);
		assert_eq!(meteor.opacity, 1.0);
		assert!(meteor.trail.is_empty());
	}
}

#[test]
fn trail_never_exceeds_capacity() {
	let mut rng = SmallRng::seed_from_u64(2);
	let mut meteor = Meteor::spawn(W, H, &mut rng);
	for _ in 0..500 {
		meteor.update(W, H, &mut rng);
		assert!(meteor.trail.len() <= MAX_TRAIL);
	}
}

#[test]
fn trail_gradient_fades_toward_the_tail() {
	let mut rng = SmallRng::seed_from_u64(3);
	let mut meteor = Meteor::spawn(W, H, &mut rng);
	for _ in 0..MAX_TRAIL {
		meteor.update(W, H, &mut rng);
	}

	let opacities: Vec<f64> = meteor.trail.iter().map(|p| p.opacity).collect();
	for pair in opacities.windows(2) {
		assert!(pair[0] <= pair[1], "older trail points must be dimmer");
	}
	// The oldest point is fully transparent, the newest is not.
	assert_eq!(opacities[0], 0.0);
	assert!(*opacities.last().unwrap() > 0.0);
}

#[test]
fn pooled_meteor_respawns_after_leaving_bounds() {
	let mut rng = SmallRng::seed_from_u64(4);
	let mut meteor = Meteor::spawn(W, H, &mut rng);

	// Drive it far outside the exit margin; the next update respawns it.
	meteor.x = W + EXIT_MARGIN + 50.0;
	meteor.update(W, H, &mut rng);

	assert_on_spawn_band(&meteor);
	assert!(meteor.alive());
}

#[test]
fn pooled_meteor_respawns_when_fully_faded() {
	let mut rng = SmallRng::seed_from_u64(5);
	let mut meteor = Meteor::spawn(W, H, &mut rng);
	meteor.x = W / 2.0;
	meteor.y = H / 2.0;
	meteor.opacity = 0.001;
	meteor.fade_rate = 0.01;

	meteor.update(W, H, &mut rng);

	assert_on_spawn_band(&meteor);
	assert_eq!(meteor.opacity, 1.0);
}

#[test]
fn burst_meteor_fades_out_and_stays_dead() {
	let mut rng = SmallRng::seed_from_u64(6);
	let mut meteor = Meteor::burst(400.0, 300.0, 0.0, 3.0);
	assert!(meteor.ephemeral);
	assert!(meteor.alive());

	// fade_rate 0.05 per frame: gone within 20 frames, never respawned.
	for _ in 0..25 {
		meteor.update(W, H, &mut rng);
	}
	assert!(!meteor.alive());
	assert!(meteor.x > 400.0, "burst keeps drifting along its velocity");
}

#[test]
fn burst_meteor_ignores_bounds() {
	let mut rng = SmallRng::seed_from_u64(7);
	let mut meteor = Meteor::burst(0.0, 0.0, std::f64::consts::PI, 8.0);
	for _ in 0..100 {
		meteor.update(W, H, &mut rng);
	}
	// Far outside the exit margin, but ephemeral meteors never reset.
	assert!(meteor.x < -EXIT_MARGIN);
	assert!(!meteor.alive());
}
