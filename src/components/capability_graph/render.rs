//! Canvas rendering for the capability map.
//!
//! Draws background, edges, nodes, and labels each frame, reading node
//! positions straight from the layout adapter. Rendering uses multiple passes
//! for correct z-ordering: faded and neutral elements first, the highlighted
//! neighborhood on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::highlight::HighlightClass;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::DashboardState;
use super::theme::{Color, Theme};

/// Renders the complete graph to the canvas.
pub fn render(
	state: &DashboardState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);
	draw_labels(state, ctx, &scale, theme);

	ctx.restore();
}

fn draw_background(state: &DashboardState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				(state.width.max(state.height)) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color_secondary.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn edge_stroke(class: HighlightClass, scale: &ScaledValues, theme: &Theme) -> (Color, f64) {
	match class {
		HighlightClass::Neutral => (theme.edge.color, scale.edge_line_width),
		HighlightClass::Highlighted => (theme.edge.highlight_color, scale.edge_line_width * 1.5),
		HighlightClass::Faded => (
			theme.edge.color.with_alpha(theme.edge.color.a * theme.edge.faded_alpha),
			scale.edge_line_width,
		),
	}
}

fn draw_edges(
	state: &DashboardState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let positions = state.layout.positions();
	let edges = state.layout.edges();

	// Highlighted edges render in a second pass, on top.
	for highlighted_pass in [false, true] {
		for (index, &(source, target)) in edges.iter().enumerate() {
			let class = state.highlights.edge(index);
			if (class == HighlightClass::Highlighted) != highlighted_pass {
				continue;
			}

			let (color, width) = edge_stroke(class, scale, theme);
			let (x1, y1) = positions[source];
			let (x2, y2) = positions[target];

			ctx.set_stroke_style_str(&color.to_css());
			ctx.set_line_width(width);
			ctx.begin_path();
			ctx.move_to(x1, y1);
			ctx.line_to(x2, y2);
			ctx.stroke();
		}
	}
}

fn draw_nodes(
	state: &DashboardState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	for highlighted_pass in [false, true] {
		state.layout.for_each_node(|index, x, y, visual| {
			let class = state.highlights.node(index);
			if (class == HighlightClass::Highlighted) != highlighted_pass {
				return;
			}

			let alpha = match class {
				HighlightClass::Faded => theme.node.faded_alpha,
				_ => 1.0,
			};
			draw_node(ctx, x, y, scale, theme, visual.color, alpha, class);
		});
	}
}

#[allow(clippy::too_many_arguments)]
fn draw_node(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	scale: &ScaledValues,
	theme: &Theme,
	color: Color,
	alpha: f64,
	class: HighlightClass,
) {
	let radius = scale.node_radius;

	ctx.set_global_alpha(alpha);

	if theme.node.use_gradient {
		let gradient = ctx
			.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
			.unwrap();

		let highlight = color.lighten(0.4);
		let shadow = color.darken(0.2);

		gradient.add_color_stop(0.0, &highlight.to_css()).unwrap();
		gradient.add_color_stop(0.7, &color.to_css()).unwrap();
		gradient.add_color_stop(1.0, &shadow.to_css()).unwrap();

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	} else {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&color.to_css());
		ctx.fill();
	}

	if theme.node.border_width > 0.0 {
		let border = match class {
			HighlightClass::Highlighted => theme.node.highlight_border_color,
			_ => theme.node.border_color,
		};
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&border.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}

	ctx.set_global_alpha(1.0);
}

fn draw_labels(
	state: &DashboardState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let (offset_x, offset_y) = scale.label_offset;
	ctx.set_font(&scale.label_font);

	state.layout.for_each_node(|index, x, y, visual| {
		let (color, alpha) = match state.highlights.node(index) {
			HighlightClass::Neutral => (theme.label.color, 1.0),
			HighlightClass::Highlighted => (theme.label.highlight_color, 1.0),
			HighlightClass::Faded => (theme.label.color, theme.label.faded_alpha),
		};

		ctx.set_global_alpha(alpha);
		ctx.set_fill_style_str(&color.to_css());
		let _ = ctx.fill_text(&visual.label, x + offset_x, y + offset_y);
	});

	ctx.set_global_alpha(1.0);
}
