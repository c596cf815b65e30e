//! Force-directed node map component.
//!
//! A small navigation map: nodes joined by spring links, draggable with
//! mouse or one finger. The central node stays pinned at the viewport
//! center; clicking the special node fades the scene and navigates back
//! to the sky page. Physics lives in [`physics::SpringLayout`], free of
//! browser types.

mod component;
pub mod physics;
mod render;
pub mod state;
mod types;

pub use component::NodeMap;
pub use state::NodeMapState;
pub use types::{MapData, MapLink, MapNode, NodeRole, demo_map};
