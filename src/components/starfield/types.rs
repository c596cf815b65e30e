//! Star descriptor records, the input data model for the starfield.

use serde::{Deserialize, Deserializer};

/// Category of an interactive star. Drives color and base size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StarKind {
	Contact,
	Tech,
	Project,
	Achievement,
	#[default]
	Other,
}

impl StarKind {
	/// Map a descriptor `type` string to a kind. Unknown names fall back to
	/// [`StarKind::Other`] rather than rejecting the record.
	pub fn from_name(name: &str) -> Self {
		match name {
			"contact" => Self::Contact,
			"tech" => Self::Tech,
			"project" => Self::Project,
			"achievement" => Self::Achievement,
			_ => Self::Other,
		}
	}

	/// Resting radius in pixels for stars of this kind.
	pub fn base_radius(self) -> f64 {
		match self {
			Self::Contact | Self::Achievement => 5.0,
			Self::Tech | Self::Other => 4.0,
			Self::Project => 6.0,
		}
	}
}

impl<'de> Deserialize<'de> for StarKind {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let name = String::deserialize(deserializer)?;
		Ok(Self::from_name(&name))
	}
}

/// An external link shown in a star's tooltip.
#[derive(Clone, Debug, Deserialize)]
pub struct StarLink {
	pub text: String,
	pub url: String,
}

/// One interactive star as described by `stars.json`.
///
/// `x` and `y` are fractional screen coordinates in `[0, 1]`; out-of-range
/// values are tolerated (the loader warns but keeps the record).
#[derive(Clone, Debug, Deserialize)]
pub struct StarRecord {
	pub x: f64,
	pub y: f64,
	#[serde(rename = "type", default)]
	pub kind: StarKind,
	pub title: String,
	pub description: String,
	#[serde(default)]
	pub links: Vec<StarLink>,
}

/// Built-in records used when `stars.json` is missing or unreadable.
pub fn demo_records() -> Vec<StarRecord> {
	vec![
		StarRecord {
			x: 0.2,
			y: 0.3,
			kind: StarKind::Contact,
			title: "Email".to_string(),
			description: "Reach me by mail".to_string(),
			links: vec![StarLink {
				text: "Write".to_string(),
				url: "mailto:hello@example.com".to_string(),
			}],
		},
		StarRecord {
			x: 0.7,
			y: 0.4,
			kind: StarKind::Tech,
			title: "Rust".to_string(),
			description: "Primary language these days".to_string(),
			links: vec![],
		},
		StarRecord {
			x: 0.5,
			y: 0.6,
			kind: StarKind::Project,
			title: "Latest project".to_string(),
			description: "What I have been building recently".to_string(),
			links: vec![StarLink {
				text: "GitHub".to_string(),
				url: "https://github.com".to_string(),
			}],
		},
	]
}
