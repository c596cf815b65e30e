//! Canvas rendering for the starfield scene.
//!
//! Fixed draw order per frame: background fill, background stars,
//! interactive stars, meteors on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::theme::StarfieldTheme;

use super::meteor::Meteor;
use super::state::StarfieldState;

/// Renders the complete scene to the canvas.
pub fn render(state: &StarfieldState, ctx: &CanvasRenderingContext2d, theme: &StarfieldTheme) {
	draw_background(state, ctx, theme);
	draw_background_stars(state, ctx, theme);
	draw_stars(state, ctx, theme);
	draw_meteors(state, ctx, theme);
}

fn draw_background(state: &StarfieldState, ctx: &CanvasRenderingContext2d, theme: &StarfieldTheme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				state.width.max(state.height) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_background_stars(
	state: &StarfieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &StarfieldTheme,
) {
	let color = theme.detail.background_star;
	for star in &state.background {
		ctx.set_fill_style_str(&color.with_alpha(star.twinkle_alpha()).to_css());
		ctx.begin_path();
		let _ = ctx.arc(star.x, star.y, star.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_stars(state: &StarfieldState, ctx: &CanvasRenderingContext2d, theme: &StarfieldTheme) {
	for (index, star) in state.stars.iter().enumerate() {
		let color = theme.star_color(star.record.kind);

		ctx.save();

		if star.glow > 0.0 {
			ctx.set_shadow_color(&color.to_css());
			ctx.set_shadow_blur(theme.detail.glow_blur * star.glow);
		}

		ctx.set_fill_style_str(&color.with_alpha(star.twinkle_alpha()).to_css());
		ctx.begin_path();
		let _ = ctx.arc(star.x, star.y, star.radius, 0.0, PI * 2.0);
		ctx.fill();

		// Bright core while hovered or pinned.
		if state.pointer.is_active(index) {
			ctx.set_fill_style_str(&theme.detail.core.with_alpha(theme.detail.core_alpha).to_css());
			ctx.begin_path();
			let _ = ctx.arc(star.x, star.y, star.radius * 0.4, 0.0, PI * 2.0);
			ctx.fill();
		}

		ctx.restore();
	}
}

fn draw_meteors(state: &StarfieldState, ctx: &CanvasRenderingContext2d, theme: &StarfieldTheme) {
	for meteor in &state.meteors {
		draw_meteor(meteor, ctx, theme);
	}
}

fn draw_meteor(meteor: &Meteor, ctx: &CanvasRenderingContext2d, theme: &StarfieldTheme) {
	if meteor.trail.len() < 2 {
		return;
	}

	let style = &theme.meteor;

	ctx.save();
	ctx.set_line_cap("round");
	ctx.set_line_join("round");

	let len = meteor.trail.len();
	for i in 1..len {
		let current = meteor.trail[i];
		let previous = meteor.trail[i - 1];

		ctx.set_stroke_style_str(&style.color.with_alpha(current.opacity.max(0.0)).to_css());
		ctx.set_line_width(i as f64 / len as f64 * style.max_line_width);

		ctx.begin_path();
		ctx.move_to(previous.x, previous.y);
		ctx.line_to(current.x, current.y);
		ctx.stroke();
	}

	// Glowing head at the newest point.
	if let Some(head) = meteor.trail.back() {
		ctx.set_fill_style_str(&style.color.with_alpha(meteor.opacity.max(0.0)).to_css());
		ctx.set_shadow_color(&style.color.to_css());
		ctx.set_shadow_blur(style.head_blur);

		ctx.begin_path();
		let _ = ctx.arc(head.x, head.y, style.head_radius, 0.0, PI * 2.0);
		ctx.fill();
	}

	ctx.restore();
}
