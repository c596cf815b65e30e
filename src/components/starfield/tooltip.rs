//! Tooltip placement and content.
//!
//! Placement is a greedy four-quadrant flip: prefer below-right of the
//! anchor, flip left/up when that would overflow, then clamp into the
//! viewport. Only one tooltip exists at a time, so no constraint solving is
//! needed.

use super::types::StarRecord;

/// Gap between the anchor point and the tooltip's near edge.
pub const POINTER_OFFSET: f64 = 15.0;
/// Minimum distance kept from the viewport edges after flipping.
pub const EDGE_MARGIN: f64 = 15.0;

/// Computed top-left corner for the tooltip element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
	pub left: f64,
	pub top: f64,
}

/// Place a tooltip of the given measured size near the anchor point.
///
/// For any tooltip no larger than the viewport the result is fully inside
/// it: `left/top >= 0` and `left + width <= viewport_w` (same for the
/// vertical axis).
pub fn place(
	anchor_x: f64,
	anchor_y: f64,
	width: f64,
	height: f64,
	viewport_w: f64,
	viewport_h: f64,
) -> Placement {
	let mut left = anchor_x + POINTER_OFFSET;
	if left + width > viewport_w {
		left = anchor_x - width - POINTER_OFFSET;
	}

	let mut top = anchor_y + POINTER_OFFSET;
	if top + height > viewport_h {
		top = anchor_y - height - POINTER_OFFSET;
	}

	left = left.max(EDGE_MARGIN);
	top = top.max(EDGE_MARGIN);

	// The margin clamp must not push the box back out the far edge.
	if left + width > viewport_w {
		left = (viewport_w - width).max(0.0);
	}
	if top + height > viewport_h {
		top = (viewport_h - height).max(0.0);
	}

	Placement { left, top }
}

/// Render a record as tooltip HTML: bold title, description, and the link
/// list opening in a new browsing context.
pub fn content_html(record: &StarRecord) -> String {
	let mut html = format!(
		"<strong>{}</strong><br>{}",
		escape(&record.title),
		escape(&record.description)
	);

	if !record.links.is_empty() {
		html.push_str("<div class=\"links\">");
		for link in &record.links {
			html.push_str(&format!(
				"<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a><br>",
				escape(&link.url),
				escape(&link.text)
			));
		}
		html.push_str("</div>");
	}

	html
}

fn escape(text: &str) -> String {
	text.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
}
