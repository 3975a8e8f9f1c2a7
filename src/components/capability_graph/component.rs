//! Leptos component wrapping the capability map dashboard.
//!
//! The component creates the canvas, the four detail panel mounts, and the
//! search input, and wires up the pointer handlers for node dragging,
//! panning, zooming, and click selection. An animation loop runs via
//! `requestAnimationFrame`, advancing the physics simulation and any view
//! transition before rendering each frame.
//!
//! A press that never travels past the click slop is a click: on a node it
//! feeds `NodeClick` through the selection state machine, on the background
//! `BackgroundClick`. Presses that do travel become node drags (pinning the
//! node for the duration) or background pans.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent,
	WheelEvent, Window,
};

use super::detail;
use super::focus::{Effect as FocusEffect, FocusEvent};
use super::render;
use super::scale::ScaleConfig;
use super::search::{self, SearchOutcome};
use super::state::{CLICK_SLOP, DashboardState, DragState, PanState};
use super::theme::Theme;
use super::types::DashboardData;

/// Bundles dashboard state with visual configuration.
struct GraphContext {
	state: DashboardState,
	scale: ScaleConfig,
	theme: Theme,
}

/// Write handles for the four detail panel mounts.
#[derive(Clone, Copy)]
struct PanelSinks {
	node: WriteSignal<String>,
	cbbs: WriteSignal<String>,
	objectives: WriteSignal<String>,
	artifacts: WriteSignal<String>,
}

/// Execute the panel-side effects of a focus transition, in order.
///
/// Each panel renders independently from the same focus value; an empty
/// lookup in one never blocks the rest.
fn apply_panel_effects(effects: &[FocusEffect], state: &DashboardState, panels: &PanelSinks) {
	for effect in effects {
		match *effect {
			FocusEffect::ShowNodePanel(index) => panels
				.node
				.set(detail::node_panel(&state.nodes[index], &state.nodes)),
			FocusEffect::ShowCbbPanel(index) => panels
				.cbbs
				.set(detail::cbb_panel(&state.nodes[index].id, &state.tables)),
			FocusEffect::ShowObjectivesPanel(index) => panels
				.objectives
				.set(detail::objectives_panel(&state.nodes[index].id, &state.tables)),
			FocusEffect::ShowArtifactsPanel(index) => panels
				.artifacts
				.set(detail::artifacts_panel(&state.nodes[index].id, &state.tables)),
			FocusEffect::ResetPanels => {
				panels.node.set(detail::NODE_PANEL_PLACEHOLDER.to_string());
				panels.cbbs.set(detail::CBB_PANEL_PLACEHOLDER.to_string());
				panels
					.objectives
					.set(detail::OBJECTIVES_PANEL_PLACEHOLDER.to_string());
				panels
					.artifacts
					.set(detail::ARTIFACTS_PANEL_PLACEHOLDER.to_string());
			}
			// Graph-side effects are applied by DashboardState::apply.
			FocusEffect::ApplyHighlight(_)
			| FocusEffect::ClearHighlight
			| FocusEffect::CenterOn(_) => {}
		}
	}
}

/// Renders the interactive capability map with its detail panels and search
/// box.
///
/// The canvas sizes itself to its parent container by default; explicit
/// `width`/`height` override automatic sizing.
#[component]
pub fn CapabilityGraph(
	/// The validated input tables.
	data: DashboardData,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init) = (context.clone(), animate.clone());

	let (node_panel, set_node_panel) = signal(detail::NODE_PANEL_PLACEHOLDER.to_string());
	let (cbb_panel, set_cbb_panel) = signal(detail::CBB_PANEL_PLACEHOLDER.to_string());
	let (objectives_panel, set_objectives_panel) =
		signal(detail::OBJECTIVES_PANEL_PLACEHOLDER.to_string());
	let (artifacts_panel, set_artifacts_panel) =
		signal(detail::ARTIFACTS_PANEL_PLACEHOLDER.to_string());
	let panels = PanelSinks {
		node: set_node_panel,
		cbbs: set_cbb_panel,
		objectives: set_objectives_panel,
		artifacts: set_artifacts_panel,
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let theme = Theme::default();
		*context_init.borrow_mut() = Some(GraphContext {
			state: DashboardState::new(&data, w, h, &theme),
			scale: ScaleConfig::default(),
			theme,
		});

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let dt = 0.016;
				if c.state.animation_running {
					c.state.tick(dt);
				}
				render::render(&c.state, &ctx, &c.scale, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			if let Some(index) = c.state.node_at_position(x, y, &c.scale) {
				let (nx, ny) = c.state.layout.position(index);
				c.state.drag = DragState {
					active: true,
					node: Some(index),
					start_x: x,
					start_y: y,
					node_start_x: nx,
					node_start_y: ny,
					moved: false,
				};
				// Pinned from the press; a no-move release is still a click.
				c.state.layout.pin(index);
			} else {
				c.state.pan = PanState {
					active: true,
					start_x: x,
					start_y: y,
					transform_start_x: c.state.transform.x,
					transform_start_y: c.state.transform.y,
					moved: false,
				};
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.state.drag.active {
				let (dx, dy) = (x - c.state.drag.start_x, y - c.state.drag.start_y);
				if !c.state.drag.moved && (dx * dx + dy * dy).sqrt() >= CLICK_SLOP {
					c.state.drag.moved = true;
				}
				if c.state.drag.moved {
					if let Some(index) = c.state.drag.node {
						let (wx, wy) = (
							c.state.drag.node_start_x + dx / c.state.transform.k,
							c.state.drag.node_start_y + dy / c.state.transform.k,
						);
						c.state.layout.drag_to(index, wx, wy);
					}
				}
			} else if c.state.pan.active {
				let (dx, dy) = (x - c.state.pan.start_x, y - c.state.pan.start_y);
				if !c.state.pan.moved && (dx * dx + dy * dy).sqrt() >= CLICK_SLOP {
					c.state.pan.moved = true;
				}
				if c.state.pan.moved {
					c.state.interrupt_view_animation();
					c.state.transform.x = c.state.pan.transform_start_x + dx;
					c.state.transform.y = c.state.pan.transform_start_y + dy;
				}
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			if c.state.drag.active {
				let node = c.state.drag.node;
				let clicked = !c.state.drag.moved;
				c.state.drag = DragState::default();
				if let Some(index) = node {
					c.state.layout.release(index);
					if clicked {
						let effects = c.state.apply(FocusEvent::NodeClick(index));
						apply_panel_effects(&effects, &c.state, &panels);
					}
				}
			} else if c.state.pan.active {
				let clicked = !c.state.pan.moved;
				c.state.pan = PanState::default();
				if clicked {
					let effects = c.state.apply(FocusEvent::BackgroundClick);
					apply_panel_effects(&effects, &c.state, &panels);
				}
			}
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			if let Some(index) = c.state.drag.node {
				c.state.layout.release(index);
			}
			c.state.drag = DragState::default();
			c.state.pan = PanState::default();
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			c.state.interrupt_view_animation();
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (c.state.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / c.state.transform.k;
			c.state.transform.x = x - (x - c.state.transform.x) * ratio;
			c.state.transform.y = y - (y - c.state.transform.y) * ratio;
			c.state.transform.k = new_k;
		}
	};

	let context_se = context.clone();
	let on_search = move |ev: KeyboardEvent| {
		let Some(input) = ev
			.target()
			.and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
		else {
			return;
		};
		let query = input.value().trim().to_lowercase();

		if let Some(ref mut c) = *context_se.borrow_mut() {
			match search::resolve(&query, &c.state.nodes) {
				SearchOutcome::Match(index) => {
					let effects = c.state.apply(FocusEvent::SearchMatch(index));
					apply_panel_effects(&effects, &c.state, &panels);
				}
				SearchOutcome::NoMatch => {
					let message = format!(
						"No matching node found for \"{query}\". Try a different name or short code."
					);
					if let Some(window) = web_sys::window() {
						let _ = window.alert_with_message(&message);
					}
				}
				SearchOutcome::EmptyQuery => {}
			}
		}
	};

	view! {
		<div class="capability-dashboard">
			<div class="graph-pane">
				<input
					class="node-search"
					type="text"
					placeholder="Search nodes by name..."
					on:keyup=on_search
				/>
				<canvas
					node_ref=canvas_ref
					class="capability-graph-canvas"
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=on_mouseup
					on:mouseleave=on_mouseleave
					on:wheel=on_wheel
					style="display: block; cursor: grab;"
				/>
			</div>
			<div class="detail-panels">
				<div class="panel node-details" inner_html=move || node_panel.get()></div>
				<div class="panel cbb-details" inner_html=move || cbb_panel.get()></div>
				<div class="panel node-objectives" inner_html=move || objectives_panel.get()></div>
				<div class="panel node-artifacts" inner_html=move || artifacts_panel.get()></div>
			</div>
		</div>
	}
}
