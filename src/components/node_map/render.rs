//! Canvas rendering for the node map: links first, then nodes, then labels.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::theme::MapTheme;

use super::state::NodeMapState;

/// Renders the complete map to the canvas.
pub fn render(state: &NodeMapState, ctx: &CanvasRenderingContext2d, theme: &MapTheme) {
	ctx.set_fill_style_str(&theme.background.color.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	// Activation fade dims the whole scene, not individual elements.
	ctx.set_global_alpha(state.alpha());

	for &(source, target) in &state.layout.links {
		let (a, b) = (&state.layout.nodes[source], &state.layout.nodes[target]);
		ctx.set_stroke_style_str(&theme.link.to_css());
		ctx.set_line_width(theme.link_width);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}

	for node in &state.layout.nodes {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, theme.node_radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&theme.node_fill.to_css());
		ctx.fill();
		ctx.set_stroke_style_str(&theme.node_stroke.to_css());
		ctx.set_line_width(theme.node_stroke_width);
		ctx.stroke();
	}

	ctx.set_fill_style_str(&theme.label.to_css());
	ctx.set_font(&theme.label_font);
	ctx.set_text_align("center");
	for node in &state.layout.nodes {
		let _ = ctx.fill_text(&node.name, node.x, node.y + 6.0);
	}
	ctx.set_text_align("start");

	ctx.set_global_alpha(1.0);
}
