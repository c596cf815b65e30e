// Host-side tests for the starfield scene: hit testing, the end-to-end
// hover/pin scenario, resize behavior, and entity bookkeeping.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use star_portfolio::components::starfield::state::{BACKGROUND_STAR_COUNT, METEOR_COUNT};
use star_portfolio::components::starfield::{
	PointerMode, PointerUpdate, StarKind, StarLink, StarRecord, StarfieldState,
};

fn email_record() -> StarRecord {
	StarRecord {
		x: 0.5,
		y: 0.5,
		kind: StarKind::Contact,
		title: "Email".to_string(),
		description: "Reach me".to_string(),
		links: vec![StarLink {
			text: "Send".to_string(),
			url: "mailto:a@b.com".to_string(),
		}],
	}
}

fn scene(records: Vec<StarRecord>) -> StarfieldState {
	StarfieldState::new(records, 800.0, 600.0, SmallRng::seed_from_u64(42))
}

#[test]
fn star_is_centered_from_fractional_coordinates() {
	let state = scene(vec![email_record()]);
	assert_eq!(state.stars.len(), 1);
	assert_eq!((state.stars[0].x, state.stars[0].y), (400.0, 300.0));
	assert_eq!(state.background.len(), BACKGROUND_STAR_COUNT);
	assert_eq!(state.meteors.len(), METEOR_COUNT);
}

#[test]
fn hit_boundary_is_inclusive() {
	let state = scene(vec![email_record()]);
	let star = &state.stars[0];

	// Contact stars rest at radius 5, so the hit radius is the 20 px
	// clickability floor.
	assert!(star.hit_test(400.0, 300.0));
	assert!(star.hit_test(420.0, 300.0), "boundary itself is a hit");
	assert!(!star.hit_test(420.001, 300.0), "just outside misses");
	assert!(!star.hit_test(420.0, 320.0));
}

#[test]
fn overlapping_stars_resolve_to_the_last_in_scan_order() {
	let mut near_twin = email_record();
	near_twin.title = "Twin".to_string();
	let state = scene(vec![email_record(), near_twin]);

	assert_eq!(state.star_at(400.0, 300.0), Some(1));
}

#[test]
fn hover_pin_dismiss_scenario() {
	let mut state = scene(vec![email_record()]);

	// Mouse over the star center: hover with tooltip.
	assert_eq!(state.pointer_moved(400.0, 300.0), PointerUpdate::ShowHover(0));
	assert!(state.stars[0].hovered);

	// Click pins.
	assert_eq!(state.clicked(400.0, 300.0), PointerUpdate::ShowPinned(0));
	assert_eq!(state.pointer.mode(), PointerMode::Pinned(0));

	// Movement is ignored while pinned.
	assert_eq!(state.pointer_moved(100.0, 100.0), PointerUpdate::None);
	assert_eq!(state.pointer.mode(), PointerMode::Pinned(0));

	// Click on empty canvas dismisses.
	assert_eq!(state.clicked(50.0, 50.0), PointerUpdate::Hide);
	assert_eq!(state.pointer.mode(), PointerMode::Idle);
	assert!(!state.stars[0].hovered);
}

#[test]
fn clicking_a_star_launches_a_burst() {
	let mut state = scene(vec![email_record()]);
	state.clicked(400.0, 300.0);

	assert_eq!(state.meteors.len(), METEOR_COUNT + 8);
	assert_eq!(state.meteors.iter().filter(|m| m.ephemeral).count(), 8);

	// Burst fragments start at the click point.
	for meteor in state.meteors.iter().filter(|m| m.ephemeral) {
		assert_eq!((meteor.x, meteor.y), (400.0, 300.0));
	}

	// A miss does not spawn anything.
	let before = state.meteors.len();
	state.clicked(50.0, 50.0);
	assert_eq!(state.meteors.len(), before);
}

#[test]
fn burst_fragments_are_culled_once_faded() {
	let mut state = scene(vec![email_record()]);
	state.clicked(400.0, 300.0);

	// fade_rate 0.05: bursts are gone after ~20 frames while the pool
	// respawns in place.
	for _ in 0..30 {
		state.tick();
	}
	assert_eq!(state.meteors.len(), METEOR_COUNT);
	assert!(state.meteors.iter().all(|m| !m.ephemeral));
}

#[test]
fn active_star_grows_and_glows() {
	let mut state = scene(vec![email_record()]);
	let base = state.stars[0].base_radius;

	state.pointer_moved(400.0, 300.0);
	for _ in 0..120 {
		state.tick();
	}
	let grown = state.stars[0].radius;
	assert!(grown > base * 2.4, "eased up toward 2.5x, got {grown}");
	assert!(state.stars[0].glow > 0.95);

	// Leaving eases back down.
	state.pointer_moved(10.0, 10.0);
	for _ in 0..120 {
		state.tick();
	}
	assert!(state.stars[0].radius < base * 1.1);
	assert!(state.stars[0].glow < 0.05);
}

#[test]
fn pinned_star_stays_active_without_hover() {
	let mut state = scene(vec![email_record()]);
	state.clicked(400.0, 300.0);
	// Pointer wanders off; the pinned star keeps its enlarged target.
	state.pointer_moved(10.0, 10.0);
	for _ in 0..120 {
		state.tick();
	}
	assert!(state.stars[0].radius > state.stars[0].base_radius * 2.4);
}

#[test]
fn resize_moves_stars_but_resets_nothing_else() {
	let mut state = scene(vec![email_record()]);
	state.pointer_moved(400.0, 300.0);
	for _ in 0..30 {
		state.tick();
	}
	let radius_before = state.stars[0].radius;
	let mode_before = state.pointer.mode();

	state.resize(1600.0, 600.0);

	assert_eq!((state.stars[0].x, state.stars[0].y), (800.0, 300.0));
	assert_eq!(state.stars[0].radius, radius_before);
	assert_eq!(state.pointer.mode(), mode_before);
	assert!(state.stars[0].hovered);
	assert_eq!(state.background.len(), BACKGROUND_STAR_COUNT);
}

#[test]
fn meteor_pool_trails_stay_bounded_across_many_frames() {
	let mut state = scene(vec![email_record()]);
	for _ in 0..1000 {
		state.tick();
		for meteor in &state.meteors {
			assert!(meteor.trail.len() <= star_portfolio::components::starfield::meteor::MAX_TRAIL);
		}
	}
	assert_eq!(state.meteors.len(), METEOR_COUNT);
}
