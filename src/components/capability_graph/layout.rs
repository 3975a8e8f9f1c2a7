//! Layout adapter over the external force-directed solver.
//!
//! Wraps the `force_graph` simulation with the capability map's node set and
//! owns everything position-related: seeding, per-tick updates, and drag
//! pinning. Node array position is the public identity; the solver's own
//! node indices never leave this module. The adapter is the single writer of
//! positions — every other component reads the latest tick snapshot.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use super::theme::{Color, OrdinalScale, Theme};
use super::types::GraphRecords;

/// Target energy held while a node is pinned.
const DRAG_ALPHA_TARGET: f64 = 0.3;
/// Exponential smoothing rate for alpha easing toward its target.
const ALPHA_RESPONSE: f64 = 4.0;
/// Timestep multiplier at full alpha.
const REHEAT_BOOST: f64 = 3.0;

/// Reheat control for the simulation.
///
/// `alpha` eases toward `alpha_target` and scales the solver timestep, so a
/// drag makes the layout actively reflow around the pinned node without ever
/// pausing the tick stream. Releasing the pin drops the target and the energy
/// decays back to rest.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationEnergy {
	alpha: f64,
	alpha_target: f64,
}

impl SimulationEnergy {
	/// Raise the target energy for an active drag.
	pub fn reheat(&mut self) {
		self.alpha_target = DRAG_ALPHA_TARGET;
	}

	/// Drop the target energy; alpha decays back to zero over the next ticks.
	pub fn relax(&mut self) {
		self.alpha_target = 0.0;
	}

	/// Ease alpha toward its target.
	pub fn tick(&mut self, dt: f64) {
		self.alpha += (self.alpha_target - self.alpha) * (1.0 - (-ALPHA_RESPONSE * dt).exp());
	}

	/// Current energy level.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Multiplier applied to the solver timestep.
	pub fn timestep_scale(&self) -> f64 {
		1.0 + REHEAT_BOOST * self.alpha
	}
}

/// Display data carried on each simulation node.
#[derive(Clone, Debug)]
pub struct NodeVisual {
	/// Graph label: short name when present, full name otherwise.
	pub label: String,
	/// Group color from the ordinal palette.
	pub color: Color,
}

/// The physics simulation plus the index maps tying it to the node array.
pub struct LayoutAdapter {
	graph: ForceGraph<NodeVisual, ()>,
	sim_idx: Vec<DefaultNodeIdx>,
	node_of_sim: HashMap<DefaultNodeIdx, usize>,
	edges: Vec<(usize, usize)>,
	energy: SimulationEnergy,
}

impl LayoutAdapter {
	/// Build the simulation from the loaded node and edge records.
	///
	/// Nodes are seeded on a circle around the viewport center. Edge endpoint
	/// ids are resolved against the node set; an edge naming an unknown id is
	/// dropped with a warning.
	pub fn new(records: &GraphRecords, width: f64, height: f64, theme: &Theme) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut groups = OrdinalScale::new(theme.palette.clone());
		let mut id_to_node = HashMap::new();
		let mut sim_idx = Vec::with_capacity(records.nodes.len());
		let mut node_of_sim = HashMap::new();

		for (i, node) in records.nodes.iter().enumerate() {
			let label = node
				.name_short
				.clone()
				.unwrap_or_else(|| node.name.clone());
			let color = groups.color(node.group.as_deref().unwrap_or_default());
			let angle = (i as f64) * 2.0 * PI / records.nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeVisual { label, color },
			});
			sim_idx.push(idx);
			node_of_sim.insert(idx, i);
			id_to_node.insert(node.id.as_str(), i);
		}

		let mut edges = Vec::with_capacity(records.links.len());
		for link in &records.links {
			match (
				id_to_node.get(link.source.as_str()),
				id_to_node.get(link.target.as_str()),
			) {
				(Some(&source), Some(&target)) => {
					graph.add_edge(sim_idx[source], sim_idx[target], EdgeData::default());
					edges.push((source, target));
				}
				_ => warn!(
					"capmap: dropping edge with unknown endpoint {} -> {}",
					link.source, link.target
				),
			}
		}

		Self {
			graph,
			sim_idx,
			node_of_sim,
			edges,
			energy: SimulationEnergy::default(),
		}
	}

	/// Number of simulated nodes.
	pub fn node_count(&self) -> usize {
		self.sim_idx.len()
	}

	/// Resolved edges as node array positions, in stored order.
	pub fn edges(&self) -> &[(usize, usize)] {
		&self.edges
	}

	/// Advance the simulation one tick, scaled by the current energy.
	pub fn tick(&mut self, dt: f32) {
		self.energy.tick(dt as f64);
		self.graph.update(dt * self.energy.timestep_scale() as f32);
	}

	/// Latest position of one node.
	pub fn position(&self, index: usize) -> (f64, f64) {
		let idx = self.sim_idx[index];
		let mut position = (0.0, 0.0);
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				position = (node.x() as f64, node.y() as f64);
			}
		});
		position
	}

	/// Fresh position snapshot for every node, by array position.
	pub fn positions(&self) -> Vec<(f64, f64)> {
		let mut positions = vec![(0.0, 0.0); self.sim_idx.len()];
		self.graph.visit_nodes(|node| {
			if let Some(&i) = self.node_of_sim.get(&node.index()) {
				positions[i] = (node.x() as f64, node.y() as f64);
			}
		});
		positions
	}

	/// Visit every node with its array position, latest coordinates, and
	/// display data.
	pub fn for_each_node(&self, mut visit: impl FnMut(usize, f64, f64, &NodeVisual)) {
		self.graph.visit_nodes(|node| {
			if let Some(&i) = self.node_of_sim.get(&node.index()) {
				visit(i, node.x() as f64, node.y() as f64, &node.data.user_data);
			}
		});
	}

	/// Pin a node at its current position and reheat the layout.
	pub fn pin(&mut self, index: usize) {
		let idx = self.sim_idx[index];
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = true;
			}
		});
		self.energy.reheat();
	}

	/// Move a pinned node to a new position.
	pub fn drag_to(&mut self, index: usize, x: f64, y: f64) {
		let idx = self.sim_idx[index];
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = x as f32;
				node.data.y = y as f32;
			}
		});
	}

	/// Clear a node's pin and let the energy decay back to rest.
	pub fn release(&mut self, index: usize) {
		let idx = self.sim_idx[index];
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = false;
			}
		});
		self.energy.relax();
	}

	/// Current reheat level, for diagnostics.
	pub fn energy(&self) -> SimulationEnergy {
		self.energy
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn records(json: serde_json::Value) -> GraphRecords {
		serde_json::from_value(json).unwrap()
	}

	fn sample() -> GraphRecords {
		records(serde_json::json!({
			"nodes": [
				{ "id": "1", "name": "Alpha" },
				{ "id": "2", "name": "Beta" },
				{ "id": "3", "name": "Gamma" },
			],
			"links": [
				{ "source": "1", "target": "2" },
				{ "source": 2, "target": 3 },
			],
		}))
	}

	#[test]
	fn edges_resolve_to_array_positions() {
		let layout = LayoutAdapter::new(&sample(), 800.0, 600.0, &Theme::default());
		assert_eq!(layout.node_count(), 3);
		assert_eq!(layout.edges(), [(0, 1), (1, 2)]);
	}

	#[test]
	fn edges_with_unknown_endpoints_are_dropped() {
		let data = records(serde_json::json!({
			"nodes": [{ "id": "1", "name": "Alpha" }],
			"links": [{ "source": "1", "target": "ghost" }],
		}));
		let layout = LayoutAdapter::new(&data, 800.0, 600.0, &Theme::default());
		assert!(layout.edges().is_empty());
	}

	#[test]
	fn drag_to_moves_the_pinned_node() {
		let mut layout = LayoutAdapter::new(&sample(), 800.0, 600.0, &Theme::default());
		layout.pin(0);
		layout.drag_to(0, 42.0, 24.0);
		let (x, y) = layout.position(0);
		assert!((x - 42.0).abs() < 0.001);
		assert!((y - 24.0).abs() < 0.001);
	}

	#[test]
	fn energy_reheats_on_pin_and_decays_after_release() {
		let mut layout = LayoutAdapter::new(&sample(), 800.0, 600.0, &Theme::default());
		layout.pin(0);
		layout.tick(0.5);
		let heated = layout.energy().alpha();
		assert!(heated > 0.1);
		assert!(layout.energy().timestep_scale() > 1.0);

		layout.release(0);
		for _ in 0..200 {
			layout.tick(0.016);
		}
		assert!(layout.energy().alpha() < 0.01);
	}

	#[test]
	fn every_tick_emits_positions_for_every_node() {
		let mut layout = LayoutAdapter::new(&sample(), 800.0, 600.0, &Theme::default());
		layout.tick(0.016);
		let positions = layout.positions();
		assert_eq!(positions.len(), 3);
		let mut visited = 0;
		layout.for_each_node(|_, _, _, visual| {
			assert!(!visual.label.is_empty());
			visited += 1;
		});
		assert_eq!(visited, 3);
	}
}
