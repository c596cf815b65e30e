// Host-side tests for node map drag and activation behavior.

use star_portfolio::components::node_map::{NodeMapState, NodeRole, demo_map};

const HIT_RADIUS: f64 = 20.0;

fn state() -> NodeMapState {
	NodeMapState::new(&demo_map(), 1000.0, 800.0, HIT_RADIUS)
}

fn special_index(state: &NodeMapState) -> usize {
	state
		.layout
		.nodes
		.iter()
		.position(|n| n.role == NodeRole::Special)
		.expect("demo map has a special node")
}

#[test]
fn drag_follows_pointer_with_grab_offset() {
	let mut state = state();
	let index = special_index(&state);
	let (x, y) = (state.layout.nodes[index].x, state.layout.nodes[index].y);

	// Grab 5 px off-center; the node keeps that offset while dragged.
	assert!(state.begin_drag(x + 5.0, y + 5.0));
	state.drag_move(x + 105.0, y + 55.0);

	assert_eq!(state.layout.nodes[index].x, x + 100.0);
	assert_eq!(state.layout.nodes[index].y, y + 50.0);

	state.end_drag();
	assert!(state.drag.node.is_none());
}

#[test]
fn begin_drag_misses_empty_space() {
	let mut state = state();
	assert!(!state.begin_drag(5.0, 5.0));
	assert!(state.drag.node.is_none());
}

#[test]
fn dragged_node_resists_physics_until_release() {
	let mut state = state();
	let index = special_index(&state);
	let central = state
		.layout
		.nodes
		.iter()
		.position(|n| n.role == NodeRole::Central)
		.unwrap();

	// Park the node far from its springs and hold it there.
	let (x, y) = (state.layout.nodes[index].x, state.layout.nodes[index].y);
	assert!(state.begin_drag(x, y));
	state.drag_move(100.0, 100.0);
	for _ in 0..10 {
		state.tick();
		state.drag_move(100.0, 100.0);
	}
	assert_eq!(
		(state.layout.nodes[index].x, state.layout.nodes[index].y),
		(100.0, 100.0)
	);

	// After release the stretched spring reels it back in.
	state.end_drag();
	let stretched = distance(&state, index, central);
	for _ in 0..200 {
		state.tick();
	}
	assert!(distance(&state, index, central) < stretched);
}

fn distance(state: &NodeMapState, a: usize, b: usize) -> f64 {
	let (na, nb) = (&state.layout.nodes[a], &state.layout.nodes[b]);
	((na.x - nb.x).powi(2) + (na.y - nb.y).powi(2)).sqrt()
}

#[test]
fn clicking_special_node_starts_the_fade_once() {
	let mut state = state();
	let index = special_index(&state);
	let (x, y) = (state.layout.nodes[index].x, state.layout.nodes[index].y);

	assert!(!state.activating());
	state.clicked(x, y);
	assert!(state.activating());

	// The fade ramps down over ~60 frames and fires navigation exactly
	// once at the end.
	let mut fired = 0;
	let mut last_alpha = state.alpha();
	for _ in 0..120 {
		if state.tick() {
			fired += 1;
		}
		assert!(state.alpha() <= last_alpha);
		last_alpha = state.alpha();
	}
	assert_eq!(fired, 1);
	assert_eq!(state.alpha(), 0.0);
}

#[test]
fn clicking_central_or_normal_nodes_is_inert() {
	let mut state = state();
	let central = state
		.layout
		.nodes
		.iter()
		.position(|n| n.role == NodeRole::Central)
		.unwrap();
	let (x, y) = (state.layout.nodes[central].x, state.layout.nodes[central].y);

	state.clicked(x, y);
	assert!(!state.activating());

	state.clicked(5.0, 5.0);
	assert!(!state.activating());
}

#[test]
fn resize_repins_the_central_node() {
	let mut state = state();
	state.resize(600.0, 400.0);

	let central = state
		.layout
		.nodes
		.iter()
		.find(|n| n.role == NodeRole::Central)
		.unwrap();
	assert_eq!((central.x, central.y), (300.0, 200.0));
	assert_eq!((state.width, state.height), (600.0, 400.0));
}
