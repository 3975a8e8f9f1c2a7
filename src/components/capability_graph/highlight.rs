//! Highlight projection.
//!
//! Given a focus decision, recomputes the visual class of every node, edge,
//! and label. Assignment is total: each projection rebuilds both class vectors
//! from scratch, so switching focus never leaves stale classes behind.

use std::collections::HashSet;

/// Visual classification of one graph element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HighlightClass {
	/// No focus active; the unclassified base style.
	#[default]
	Neutral,
	/// Member of the focused node's connected neighborhood.
	Highlighted,
	/// Outside the connected neighborhood while a focus is active.
	Faded,
}

/// Per-element highlight classes. Labels share their node's class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
	/// Class per node, by array position.
	pub nodes: Vec<HighlightClass>,
	/// Class per edge, in resolved-edge order.
	pub edges: Vec<HighlightClass>,
}

/// The focused node plus every node one edge away from it.
pub fn connected_set(focus: usize, edges: &[(usize, usize)]) -> HashSet<usize> {
	let mut connected = HashSet::new();
	connected.insert(focus);
	for &(source, target) in edges {
		if source == focus || target == focus {
			connected.insert(source);
			connected.insert(target);
		}
	}
	connected
}

impl Highlights {
	/// All elements neutral; the reset state.
	pub fn cleared(node_count: usize, edge_count: usize) -> Self {
		Self {
			nodes: vec![HighlightClass::Neutral; node_count],
			edges: vec![HighlightClass::Neutral; edge_count],
		}
	}

	/// Classify every element for a focused node: connected neighborhood
	/// highlighted, everything else faded.
	pub fn project(focus: usize, node_count: usize, edges: &[(usize, usize)]) -> Self {
		let connected = connected_set(focus, edges);
		Self {
			nodes: (0..node_count)
				.map(|index| {
					if connected.contains(&index) {
						HighlightClass::Highlighted
					} else {
						HighlightClass::Faded
					}
				})
				.collect(),
			edges: edges
				.iter()
				.map(|&(source, target)| {
					if source == focus || target == focus {
						HighlightClass::Highlighted
					} else {
						HighlightClass::Faded
					}
				})
				.collect(),
		}
	}

	/// Class for a node, neutral when out of range.
	pub fn node(&self, index: usize) -> HighlightClass {
		self.nodes.get(index).copied().unwrap_or_default()
	}

	/// Class for an edge, neutral when out of range.
	pub fn edge(&self, index: usize) -> HighlightClass {
		self.edges.get(index).copied().unwrap_or_default()
	}

	/// Whether any element currently carries a non-neutral class.
	pub fn active(&self) -> bool {
		self.nodes
			.iter()
			.any(|class| *class != HighlightClass::Neutral)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// 0-1, 1-2, 3 isolated
	const EDGES: [(usize, usize); 2] = [(0, 1), (1, 2)];

	#[test]
	fn connected_set_is_the_focus_plus_one_edge_neighbors() {
		let connected = connected_set(1, &EDGES);
		assert_eq!(connected, HashSet::from([0, 1, 2]));

		let connected = connected_set(3, &EDGES);
		assert_eq!(connected, HashSet::from([3]));
	}

	#[test]
	fn projection_partitions_every_element() {
		let highlights = Highlights::project(0, 4, &EDGES);
		assert_eq!(
			highlights.nodes,
			vec![
				HighlightClass::Highlighted,
				HighlightClass::Highlighted,
				HighlightClass::Faded,
				HighlightClass::Faded,
			]
		);
		assert_eq!(
			highlights.edges,
			vec![HighlightClass::Highlighted, HighlightClass::Faded]
		);
		// No element is unclassified while a focus is active.
		assert!(
			highlights
				.nodes
				.iter()
				.chain(highlights.edges.iter())
				.all(|class| *class != HighlightClass::Neutral)
		);
	}

	#[test]
	fn cleared_returns_every_element_to_neutral() {
		let highlights = Highlights::cleared(4, 2);
		assert!(!highlights.active());
		assert!(
			highlights
				.nodes
				.iter()
				.chain(highlights.edges.iter())
				.all(|class| *class == HighlightClass::Neutral)
		);
	}

	#[test]
	fn projection_is_total_so_switching_focus_needs_no_explicit_clear() {
		let first = Highlights::project(0, 4, &EDGES);
		let second = Highlights::project(2, 4, &EDGES);
		assert_eq!(first.nodes.len(), second.nodes.len());
		assert_eq!(second.node(0), HighlightClass::Faded);
		assert_eq!(second.node(2), HighlightClass::Highlighted);
	}

	#[test]
	fn out_of_range_lookups_read_neutral() {
		let highlights = Highlights::project(0, 2, &[(0, 1)]);
		assert_eq!(highlights.node(99), HighlightClass::Neutral);
		assert_eq!(highlights.edge(99), HighlightClass::Neutral);
	}
}
