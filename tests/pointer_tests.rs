// Host-side tests for the pointer interaction state machine.

use star_portfolio::components::starfield::{PointerMode, PointerState, PointerUpdate};

#[test]
fn hover_enters_and_leaves() {
	let mut pointer = PointerState::default();
	assert_eq!(pointer.mode(), PointerMode::Idle);

	assert_eq!(pointer.pointer_moved(Some(2)), PointerUpdate::ShowHover(2));
	assert_eq!(pointer.mode(), PointerMode::Hover(2));
	assert_eq!(pointer.hovered(), Some(2));

	assert_eq!(pointer.pointer_moved(None), PointerUpdate::Hide);
	assert_eq!(pointer.mode(), PointerMode::Idle);
}

#[test]
fn hover_switches_between_stars() {
	let mut pointer = PointerState::default();
	pointer.pointer_moved(Some(0));
	assert_eq!(pointer.pointer_moved(Some(1)), PointerUpdate::ShowHover(1));
	assert_eq!(pointer.mode(), PointerMode::Hover(1));
}

#[test]
fn hover_tooltip_follows_pointer() {
	// Repeated moves over the same star keep requesting placement, so the
	// hover tooltip tracks the pointer.
	let mut pointer = PointerState::default();
	assert_eq!(pointer.pointer_moved(Some(0)), PointerUpdate::ShowHover(0));
	assert_eq!(pointer.pointer_moved(Some(0)), PointerUpdate::ShowHover(0));
}

#[test]
fn click_pins_from_any_state() {
	let mut idle = PointerState::default();
	assert_eq!(idle.clicked(Some(3)), PointerUpdate::ShowPinned(3));
	assert_eq!(idle.mode(), PointerMode::Pinned(3));

	let mut hovering = PointerState::default();
	hovering.pointer_moved(Some(1));
	assert_eq!(hovering.clicked(Some(1)), PointerUpdate::ShowPinned(1));
	assert_eq!(hovering.mode(), PointerMode::Pinned(1));
}

#[test]
fn pin_toggle_three_click_cycle() {
	let mut pointer = PointerState::default();

	assert_eq!(pointer.clicked(Some(0)), PointerUpdate::ShowPinned(0));
	assert_eq!(pointer.clicked(Some(0)), PointerUpdate::Hide);
	assert_eq!(pointer.mode(), PointerMode::Idle);
	assert_eq!(pointer.clicked(Some(0)), PointerUpdate::ShowPinned(0));
	assert_eq!(pointer.mode(), PointerMode::Pinned(0));
}

#[test]
fn click_on_other_star_repins() {
	let mut pointer = PointerState::default();
	pointer.clicked(Some(0));
	assert_eq!(pointer.clicked(Some(1)), PointerUpdate::ShowPinned(1));
	assert_eq!(pointer.mode(), PointerMode::Pinned(1));
}

#[test]
fn pinned_ignores_pointer_movement() {
	let mut pointer = PointerState::default();
	pointer.clicked(Some(0));

	assert_eq!(pointer.pointer_moved(Some(1)), PointerUpdate::None);
	assert_eq!(pointer.pointer_moved(None), PointerUpdate::None);
	assert_eq!(pointer.mode(), PointerMode::Pinned(0));
}

#[test]
fn pinned_survives_mouseleave() {
	let mut pointer = PointerState::default();
	pointer.clicked(Some(0));
	assert_eq!(pointer.pointer_left(), PointerUpdate::None);
	assert_eq!(pointer.mode(), PointerMode::Pinned(0));

	let mut hovering = PointerState::default();
	hovering.pointer_moved(Some(0));
	assert_eq!(hovering.pointer_left(), PointerUpdate::Hide);
	assert_eq!(hovering.mode(), PointerMode::Idle);
}

#[test]
fn empty_canvas_click_dismisses_pinned() {
	let mut pointer = PointerState::default();
	pointer.clicked(Some(0));
	assert_eq!(pointer.clicked(None), PointerUpdate::Hide);
	assert_eq!(pointer.mode(), PointerMode::Idle);

	// Without a pin, an empty click is inert.
	assert_eq!(pointer.clicked(None), PointerUpdate::None);
}

#[test]
fn outside_click_dismisses_only_pinned() {
	let mut pointer = PointerState::default();
	assert_eq!(pointer.outside_click(), PointerUpdate::None);

	pointer.clicked(Some(0));
	assert_eq!(pointer.outside_click(), PointerUpdate::Hide);
	assert_eq!(pointer.mode(), PointerMode::Idle);
}

#[test]
fn is_active_tracks_hover_and_pin() {
	let mut pointer = PointerState::default();
	assert!(!pointer.is_active(0));

	pointer.pointer_moved(Some(0));
	assert!(pointer.is_active(0));
	assert!(!pointer.is_active(1));

	pointer.clicked(Some(1));
	assert!(pointer.is_active(1));
	assert!(!pointer.is_active(0));
}
