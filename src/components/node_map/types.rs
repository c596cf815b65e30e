//! Map descriptor records, the input data model for the node map.

use serde::Deserialize;

/// Special behaviors a node can carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeRole {
	/// Pinned at the viewport center, immune to dragging and physics.
	Central,
	/// Clicking it fades the map out and navigates back to the sky page.
	Special,
	#[default]
	Normal,
}

/// A node as described by `mapdata.json`. Coordinates are absolute pixels
/// and only seed the layout; physics takes over from there.
#[derive(Clone, Debug, Deserialize)]
pub struct MapNode {
	pub id: String,
	pub name: String,
	pub x: f64,
	pub y: f64,
}

/// An edge between two nodes, referenced by id.
#[derive(Clone, Debug, Deserialize)]
pub struct MapLink {
	pub source: String,
	pub target: String,
}

/// Complete map data: nodes, links, and the two distinguished node ids.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
	pub nodes: Vec<MapNode>,
	pub links: Vec<MapLink>,
	#[serde(default)]
	pub central_node_id: Option<String>,
	#[serde(default)]
	pub special_node_id: Option<String>,
}

/// Built-in map used when `mapdata.json` is missing or unreadable.
pub fn demo_map() -> MapData {
	let node = |id: &str, name: &str, x: f64, y: f64| MapNode {
		id: id.to_string(),
		name: name.to_string(),
		x,
		y,
	};
	let link = |source: &str, target: &str| MapLink {
		source: source.to_string(),
		target: target.to_string(),
	};

	MapData {
		nodes: vec![
			node("me", "Me", 640.0, 360.0),
			node("home", "Home", 420.0, 240.0),
			node("projects", "Projects", 840.0, 220.0),
			node("stack", "Stack", 870.0, 490.0),
			node("contact", "Contact", 440.0, 510.0),
		],
		links: vec![
			link("me", "home"),
			link("me", "projects"),
			link("me", "stack"),
			link("me", "contact"),
		],
		central_node_id: Some("me".to_string()),
		special_node_id: Some("home".to_string()),
	}
}
