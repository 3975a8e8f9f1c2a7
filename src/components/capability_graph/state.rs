//! Dashboard state and interaction tracking.
//!
//! Combines the layout adapter with the selection state machine, the
//! highlight projection, view pan/zoom, drag/pan trackers, and the smooth
//! centering animation used by search. Created once when the component
//! mounts, then mutated each frame by the animation loop.

use super::focus::{self, Effect, Focus, FocusEvent};
use super::highlight::Highlights;
use super::layout::LayoutAdapter;
use super::scale::{ScaleConfig, ScaledValues};
use super::tables::DetailTables;
use super::theme::Theme;
use super::types::{DashboardData, NodeRecord};

/// Pointer movement below this many screen pixels counts as a click, not a
/// drag or pan.
pub const CLICK_SLOP: f64 = 4.0;

/// Seconds for the search centering transition.
const CENTER_DURATION: f64 = 0.75;

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node press, which becomes a drag once it moves past
/// the click slop.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
	/// Exceeded the click slop; release is a drag end, not a click.
	pub moved: bool,
}

/// Tracks an in-progress background press, which becomes a pan once it moves
/// past the click slop.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
	/// Exceeded the click slop; release is a pan end, not a background click.
	pub moved: bool,
}

fn ease_cubic_in_out(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// An in-flight smooth pan/zoom transition.
///
/// Purely visual: it never touches focus. A newer animation simply replaces
/// the current one.
#[derive(Clone, Debug)]
pub struct ViewAnimation {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
	duration: f64,
}

impl ViewAnimation {
	pub fn new(from: ViewTransform, to: ViewTransform, duration: f64) -> Self {
		Self {
			from,
			to,
			elapsed: 0.0,
			duration,
		}
	}

	pub fn advance(&mut self, dt: f64) {
		self.elapsed = (self.elapsed + dt).min(self.duration);
	}

	pub fn finished(&self) -> bool {
		self.elapsed >= self.duration
	}

	/// The eased transform for the current progress.
	pub fn sample(&self) -> ViewTransform {
		let progress = if self.duration <= 0.0 {
			1.0
		} else {
			self.elapsed / self.duration
		};
		let t = ease_cubic_in_out(progress);
		ViewTransform {
			x: self.from.x + (self.to.x - self.from.x) * t,
			y: self.from.y + (self.to.y - self.from.y) * t,
			k: self.from.k + (self.to.k - self.from.k) * t,
		}
	}
}

/// Core dashboard state: simulation, selection, highlight classes, detail
/// tables, and view state.
pub struct DashboardState {
	/// Authoritative node list, in stored order.
	pub nodes: Vec<NodeRecord>,
	/// The physics layout; sole writer of node positions.
	pub layout: LayoutAdapter,
	/// Current selection. Only [`DashboardState::apply`] assigns this; every
	/// other component reads it.
	focus: Focus,
	/// Highlight classes derived from the current focus.
	pub highlights: Highlights,
	/// Per-node detail lookups.
	pub tables: DetailTables,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	view_animation: Option<ViewAnimation>,
}

impl DashboardState {
	pub fn new(data: &DashboardData, width: f64, height: f64, theme: &Theme) -> Self {
		let layout = LayoutAdapter::new(&data.graph, width, height, theme);
		let highlights = Highlights::cleared(layout.node_count(), layout.edges().len());
		Self {
			nodes: data.graph.nodes.clone(),
			layout,
			focus: Focus::Idle,
			highlights,
			tables: DetailTables::build(&data.cbbs, &data.objectives, &data.artifacts),
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
			animation_running: true,
			view_animation: None,
		}
	}

	/// The current selection.
	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Hit-test a screen position against the latest node positions.
	pub fn node_at_position(&self, sx: f64, sy: f64, config: &ScaleConfig) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.layout.for_each_node(|index, x, y, _| {
			let (dx, dy) = (x - gx, y - gy);
			if (dx * dx + dy * dy).sqrt() < scale.hit_radius {
				found = Some(index);
			}
		});
		found
	}

	/// Run one focus event through the state machine and apply its graph-side
	/// effects (highlight projection, view centering).
	///
	/// Panel effects are returned to the caller in order; this keeps the
	/// highlight classes and the returned panel commands derived from the
	/// same focus value.
	pub fn apply(&mut self, event: FocusEvent) -> Vec<Effect> {
		let (next, effects) = focus::transition(self.focus, event);
		self.focus = next;
		for effect in &effects {
			match *effect {
				Effect::ApplyHighlight(index) => {
					self.highlights = Highlights::project(
						index,
						self.layout.node_count(),
						self.layout.edges(),
					);
				}
				Effect::ClearHighlight => {
					self.highlights = Highlights::cleared(
						self.layout.node_count(),
						self.layout.edges().len(),
					);
				}
				Effect::CenterOn(index) => self.center_on(index),
				_ => {}
			}
		}
		effects
	}

	/// Start a smooth transition that centers the view on a node at identity
	/// zoom. Supersedes any transition already in flight.
	fn center_on(&mut self, index: usize) {
		let (x, y) = self.layout.position(index);
		let target = ViewTransform {
			x: self.width / 2.0 - x,
			y: self.height / 2.0 - y,
			k: 1.0,
		};
		self.view_animation = Some(ViewAnimation::new(
			self.transform.clone(),
			target,
			CENTER_DURATION,
		));
	}

	/// Drop any in-flight centering transition; manual pan/zoom wins.
	pub fn interrupt_view_animation(&mut self) {
		self.view_animation = None;
	}

	/// Whether a centering transition is in flight.
	pub fn view_animation_active(&self) -> bool {
		self.view_animation.is_some()
	}

	/// Advance the simulation and any in-flight view transition by one frame.
	pub fn tick(&mut self, dt: f32) {
		self.layout.tick(dt);
		if let Some(animation) = self.view_animation.as_mut() {
			animation.advance(dt as f64);
			self.transform = animation.sample();
			if animation.finished() {
				self.view_animation = None;
			}
		}
	}
}
