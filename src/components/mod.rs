//! UI components for the portfolio effects.

pub mod follower;
pub mod marquee;
pub mod node_map;
pub mod starfield;
