//! Node map scene state: layout physics plus drag and activation tracking.

use super::physics::SpringLayout;
use super::types::{MapData, NodeRole};

/// Activation fade advances this much per frame (full fade in ~1 s at
/// 60 fps).
const FADE_STEP: f64 = 1.0 / 60.0;

/// Tracks an in-progress node drag operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
	pub node: Option<usize>,
	pub offset_x: f64,
	pub offset_y: f64,
}

/// The node map scene. Drag state and spring physics are mutually
/// exclusive for the dragged node; everything else keeps settling.
pub struct NodeMapState {
	pub layout: SpringLayout,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
	pub hit_radius: f64,
	fade: Option<f64>,
	navigated: bool,
}

impl NodeMapState {
	pub fn new(data: &MapData, width: f64, height: f64, hit_radius: f64) -> Self {
		Self {
			layout: SpringLayout::from_data(data, width, height),
			drag: DragState::default(),
			width,
			height,
			hit_radius,
			fade: None,
			navigated: false,
		}
	}

	/// Advance physics and the activation fade by one frame. Returns true
	/// exactly once, when the fade completes and navigation is due.
	pub fn tick(&mut self) -> bool {
		self.layout.step(self.drag.node);

		if let Some(progress) = &mut self.fade {
			*progress = (*progress + FADE_STEP).min(1.0);
			if *progress >= 1.0 && !self.navigated {
				self.navigated = true;
				return true;
			}
		}
		false
	}

	/// Whole-scene opacity while the activation fade runs.
	pub fn alpha(&self) -> f64 {
		1.0 - self.fade.unwrap_or(0.0)
	}

	/// Whether the activation fade has started.
	pub fn activating(&self) -> bool {
		self.fade.is_some()
	}

	/// Begin dragging the node under the pointer, if any.
	pub fn begin_drag(&mut self, x: f64, y: f64) -> bool {
		match self.layout.node_at(x, y, self.hit_radius) {
			Some(index) => {
				let node = &self.layout.nodes[index];
				self.drag = DragState {
					node: Some(index),
					offset_x: x - node.x,
					offset_y: y - node.y,
				};
				true
			}
			None => false,
		}
	}

	/// Follow the pointer with the dragged node.
	pub fn drag_move(&mut self, x: f64, y: f64) {
		if let Some(index) = self.drag.node {
			self.layout
				.drag_to(index, x - self.drag.offset_x, y - self.drag.offset_y);
		}
	}

	/// Release the dragged node back to the physics.
	pub fn end_drag(&mut self) {
		self.drag = DragState::default();
	}

	/// Click routing: the special node starts the activation fade, the
	/// central node ignores clicks, everything else is inert.
	pub fn clicked(&mut self, x: f64, y: f64) {
		if self.fade.is_some() {
			return;
		}
		if let Some(index) = self.layout.node_at(x, y, self.hit_radius)
			&& self.layout.nodes[index].role == NodeRole::Special
		{
			self.fade = Some(0.0);
		}
	}

	/// Track a viewport resize; the central node stays pinned at center.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.layout.recenter(width, height);
	}
}
