//! Canvas rendering for the background scene.
//!
//! Each layer is projected through the frame's [`Projector`] and drawn in
//! back-to-front order:
//! 1. Starfield (single color, normal blending)
//! 2. Flow field (palette color per particle slot, theme blending)
//! 3. Network links, then prism wireframes

use glam::{Mat3, Vec3};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::camera::Projector;
use super::state::SceneState;
use super::theme::{Blending, LineMaterial};

/// Smallest dot drawn, in pixels.
const MIN_POINT_PX: f64 = 0.5;

/// Renders one frame. Any canvas call that throws aborts the frame.
pub fn render(state: &SceneState, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	let projector = Projector::new(&state.camera, &state.config.camera, state.viewport);

	ctx.set_global_composite_operation(Blending::Normal.composite_operation())?;
	ctx.set_global_alpha(1.0);
	ctx.clear_rect(0.0, 0.0, state.viewport.width, state.viewport.height);

	draw_stars(state, ctx, &projector);
	draw_flow(state, ctx, &projector)?;

	ctx.set_global_composite_operation(Blending::Normal.composite_operation())?;
	if !state.links.segments().is_empty() {
		draw_lines(
			ctx,
			&projector,
			&state.appearance.links,
			state.links.segments().iter().copied(),
		);
	}
	draw_lines(
		ctx,
		&projector,
		&state.appearance.prisms,
		state.prisms.iter().flat_map(|p| p.edges()),
	);

	ctx.set_global_alpha(1.0);
	Ok(())
}

fn draw_point(ctx: &CanvasRenderingContext2d, x: f64, y: f64, size: f64) {
	let size = size.max(MIN_POINT_PX);
	ctx.fill_rect(x - size / 2.0, y - size / 2.0, size, size);
}

fn draw_stars(state: &SceneState, ctx: &CanvasRenderingContext2d, projector: &Projector) {
	let material = &state.appearance.stars;
	let spin = Mat3::from_rotation_y(state.stars.yaw);

	ctx.set_global_alpha(material.opacity);
	ctx.set_fill_style_str(&material.color.to_css());

	for c in state.stars.positions().chunks_exact(3) {
		if let Some(p) = projector.project(spin * Vec3::from_slice(c)) {
			draw_point(ctx, p.x, p.y, projector.scale_at(state.stars.size(), p.depth));
		}
	}
}

fn draw_flow(
	state: &SceneState,
	ctx: &CanvasRenderingContext2d,
	projector: &Projector,
) -> Result<(), JsValue> {
	let material = &state.appearance.flow;
	ctx.set_global_composite_operation(material.blending.composite_operation())?;
	ctx.set_global_alpha(material.opacity);

	// Batched by palette slot, one fill style each.
	let flow = &state.flow;
	for (slot, color) in material.palette.iter().enumerate() {
		ctx.set_fill_style_str(&color.to_css());
		for position in flow.slot_positions(slot) {
			if let Some(p) = projector.project(position) {
				draw_point(ctx, p.x, p.y, projector.scale_at(flow.size(), p.depth));
			}
		}
	}
	Ok(())
}

fn draw_lines(
	ctx: &CanvasRenderingContext2d,
	projector: &Projector,
	material: &LineMaterial,
	segments: impl Iterator<Item = (Vec3, Vec3)>,
) {
	if material.opacity <= 0.0 {
		return;
	}
	ctx.set_global_alpha(material.opacity);
	ctx.set_stroke_style_str(&material.color.to_css());
	ctx.set_line_width(1.0);

	ctx.begin_path();
	for (a, b) in segments {
		if let (Some(a), Some(b)) = (projector.project(a), projector.project(b)) {
			ctx.move_to(a.x, a.y);
			ctx.line_to(b.x, b.y);
		}
	}
	ctx.stroke();
}
