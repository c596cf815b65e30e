//! Interactive starfield component.
//!
//! Renders a night sky on an HTML canvas:
//! - twinkling background stars, regenerated on resize
//! - interactive stars built from `stars.json` records, with eased
//!   hover/pin growth and glow
//! - a small pool of ambient meteors plus ephemeral click bursts
//! - a tooltip that follows hover and can be pinned open by click
//!
//! The scene state ([`StarfieldState`]) and the pointer machine
//! ([`PointerState`]) are plain Rust with no browser types, so all
//! interaction behavior is covered by host-side tests.

mod component;
pub mod entity;
pub mod meteor;
pub mod pointer;
mod render;
pub mod state;
pub mod tooltip;
mod types;

pub use component::Starfield;
pub use pointer::{PointerMode, PointerState, PointerUpdate};
pub use state::StarfieldState;
pub use types::{StarKind, StarLink, StarRecord, demo_records};
