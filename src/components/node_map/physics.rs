//! Spring relaxation for the node map layout.
//!
//! Every link behaves as a spring pulling its endpoints toward a rest
//! distance; velocities decay under friction and positions integrate once
//! per frame. Constants are per-frame quantities, matching the rest of the
//! effects.

use log::warn;

use super::types::{MapData, NodeRole};

/// Distance a spring relaxes toward.
pub const REST_LENGTH: f64 = 150.0;
/// Spring force per pixel of displacement from rest.
pub const SPRING_STRENGTH: f64 = 0.01;
/// Per-frame velocity retention.
pub const FRICTION: f64 = 0.9;
/// Pull applied to direct neighbors of a dragged node per frame.
pub const DRAG_PULL: f64 = 0.1;
/// Below this separation the spring axis is undefined and the force is
/// skipped for the frame.
const MIN_DISTANCE: f64 = 1e-3;

/// One node in the layout.
#[derive(Clone, Debug)]
pub struct LayoutNode {
	pub id: String,
	pub name: String,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub fixed: bool,
	pub role: NodeRole,
}

/// The relaxing graph: nodes plus links as index pairs. Links reference
/// nodes, they do not own them.
#[derive(Clone, Debug, Default)]
pub struct SpringLayout {
	pub nodes: Vec<LayoutNode>,
	pub links: Vec<(usize, usize)>,
}

impl SpringLayout {
	/// Build the layout from descriptor data. The central node is pinned
	/// at the viewport center; links naming unknown ids are skipped with a
	/// warning.
	pub fn from_data(data: &MapData, width: f64, height: f64) -> Self {
		let mut nodes: Vec<LayoutNode> = data
			.nodes
			.iter()
			.map(|node| {
				let role = if data.central_node_id.as_deref() == Some(node.id.as_str()) {
					NodeRole::Central
				} else if data.special_node_id.as_deref() == Some(node.id.as_str()) {
					NodeRole::Special
				} else {
					NodeRole::Normal
				};
				LayoutNode {
					id: node.id.clone(),
					name: node.name.clone(),
					x: node.x,
					y: node.y,
					vx: 0.0,
					vy: 0.0,
					fixed: role == NodeRole::Central,
					role,
				}
			})
			.collect();

		for node in &mut nodes {
			if node.role == NodeRole::Central {
				node.x = width / 2.0;
				node.y = height / 2.0;
			}
		}

		let index_of = |id: &str| nodes.iter().position(|n| n.id == id);
		let mut links = Vec::with_capacity(data.links.len());
		for link in &data.links {
			match (index_of(&link.source), index_of(&link.target)) {
				(Some(source), Some(target)) => links.push((source, target)),
				_ => warn!(
					"map link references unknown node: {} -> {}",
					link.source, link.target
				),
			}
		}

		Self { nodes, links }
	}

	/// One integration step. The dragged node (if any) has its position
	/// driven by the pointer, so it is excluded from integration.
	pub fn step(&mut self, dragged: Option<usize>) {
		for node in &mut self.nodes {
			node.vx *= FRICTION;
			node.vy *= FRICTION;
		}

		for &(source, target) in &self.links {
			let (dx, dy) = (
				self.nodes[target].x - self.nodes[source].x,
				self.nodes[target].y - self.nodes[source].y,
			);
			let distance = (dx * dx + dy * dy).sqrt();
			// Coincident endpoints have no spring axis.
			if distance < MIN_DISTANCE {
				continue;
			}

			let force = SPRING_STRENGTH * (REST_LENGTH - distance);
			let (fx, fy) = (dx / distance * force, dy / distance * force);

			if !self.nodes[source].fixed {
				self.nodes[source].vx -= fx;
				self.nodes[source].vy -= fy;
			}
			if !self.nodes[target].fixed {
				self.nodes[target].vx += fx;
				self.nodes[target].vy += fy;
			}
		}

		for (index, node) in self.nodes.iter_mut().enumerate() {
			if node.fixed || dragged == Some(index) {
				continue;
			}
			node.x += node.vx;
			node.y += node.vy;
		}
	}

	/// Move the dragged node to the pointer and pull its direct non-fixed
	/// neighbors along, so edges feel taut during the drag.
	pub fn drag_to(&mut self, index: usize, x: f64, y: f64) {
		self.nodes[index].x = x;
		self.nodes[index].y = y;

		let neighbors: Vec<usize> = self
			.links
			.iter()
			.filter_map(|&(source, target)| {
				if source == index {
					Some(target)
				} else if target == index {
					Some(source)
				} else {
					None
				}
			})
			.collect();

		for neighbor in neighbors {
			let node = &mut self.nodes[neighbor];
			if !node.fixed {
				node.x += (x - node.x) * DRAG_PULL;
				node.y += (y - node.y) * DRAG_PULL;
			}
		}
	}

	/// Topmost node whose circle of the given radius covers the point.
	pub fn node_at(&self, x: f64, y: f64, radius: f64) -> Option<usize> {
		let mut found = None;
		for (index, node) in self.nodes.iter().enumerate() {
			let (dx, dy) = (x - node.x, y - node.y);
			if dx * dx + dy * dy <= radius * radius {
				found = Some(index);
			}
		}
		found
	}

	/// Re-pin the central node when the viewport changes.
	pub fn recenter(&mut self, width: f64, height: f64) {
		for node in &mut self.nodes {
			if node.role == NodeRole::Central {
				node.x = width / 2.0;
				node.y = height / 2.0;
			}
		}
	}
}
