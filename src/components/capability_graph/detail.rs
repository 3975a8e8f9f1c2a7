//! Detail panel rendering.
//!
//! Four independent render functions, each keyed by the focused node's id
//! against its lookup table, each producing panel HTML with an explicit
//! empty-state message. All of them are pure: same node and tables in,
//! identical markup out.

use super::tables::DetailTables;
use super::types::NodeRecord;

/// Node panel reset text.
pub const NODE_PANEL_PLACEHOLDER: &str = "<h2>Node Details</h2><p>Click a node to view details.</p>";
/// Building blocks panel reset text.
pub const CBB_PANEL_PLACEHOLDER: &str = "<h2>CBB Details</h2><p>Click a node to view details.</p>";
/// Objectives panel reset text.
pub const OBJECTIVES_PANEL_PLACEHOLDER: &str =
	"<h2>Objectives</h2><p>Click a node to view objectives.</p>";
/// Artifacts panel reset text.
pub const ARTIFACTS_PANEL_PLACEHOLDER: &str =
	"<h2>Artifacts</h2><p>Click a node to view artifacts.</p>";

/// Render the node detail panel.
///
/// Looks the clicked node up in the authoritative list by id and falls back
/// to the clicked record itself when absent. Optional fields render "N/A".
pub fn node_panel(clicked: &NodeRecord, nodes: &[NodeRecord]) -> String {
	let node = nodes.iter().find(|n| n.id == clicked.id).unwrap_or(clicked);
	format!(
		"<div class=\"node-data\">\
		<h2>{}</h2>\
		<p><strong>ID:</strong> {}</p>\
		<p><strong>Group:</strong> {}</p>\
		<p><strong>Overview:</strong> {}</p>\
		<p><strong>Goal:</strong> {}</p>\
		<p><strong>Definition:</strong> {}</p>\
		</div>",
		node.name,
		node.id,
		node.group.as_deref().unwrap_or("N/A"),
		node.overview.as_deref().unwrap_or("N/A"),
		node.goal.as_deref().unwrap_or("N/A"),
		format_definition(node.definitions.as_deref()),
	)
}

/// Render the building blocks panel for a node id.
pub fn cbb_panel(id: &str, tables: &DetailTables) -> String {
	let cbbs = tables.cbbs_for(id);
	if cbbs.is_empty() {
		return "<h2>CBB Details</h2><p>No CBB data found.</p>".to_string();
	}

	let mut html = String::from("<h2>CBB Details</h2>");
	for entry in cbbs {
		html.push_str(&format!(
			"<div class=\"cbb-item\"><strong>{}</strong><p>{}</p></div>",
			entry.cbb, entry.definition
		));
	}
	html
}

/// Render the objectives panel for a node id.
pub fn objectives_panel(id: &str, tables: &DetailTables) -> String {
	let items = tables.objectives_for(id);
	if items.is_empty() {
		return "<h2>Objectives</h2><p>No objectives listed for this node.</p>".to_string();
	}

	let mut html = String::from("<h2>Objectives</h2>");
	for item in items {
		html.push_str(&format!("<div class=\"obj-item\">{item}</div>"));
	}
	html
}

/// Render the artifacts panel for a node id.
pub fn artifacts_panel(id: &str, tables: &DetailTables) -> String {
	let items = tables.artifacts_for(id);
	if items.is_empty() {
		return "<h2>Artifacts</h2><p>No artifacts listed for this node.</p>".to_string();
	}

	let mut html = String::from("<h2>Artifacts</h2>");
	for item in items {
		html.push_str(&format!("<div class=\"artifact-item\">{item}</div>"));
	}
	html
}

/// Format free definition text that may embed a `1) ... 2) ...` enumerated
/// list.
///
/// Text before the first numeric marker becomes an intro paragraph; each
/// marker-delimited fragment becomes one ordered-list entry with its marker
/// stripped and whitespace trimmed. Missing or empty input renders a fixed
/// placeholder.
pub fn format_definition(text: Option<&str>) -> String {
	let Some(text) = text.filter(|t| !t.is_empty()) else {
		return "<p>N/A</p>".to_string();
	};

	let markers = marker_starts(text);
	let mut html = String::new();

	let intro = match markers.first() {
		Some(&first) => &text[..first],
		None => text,
	};
	let intro = intro.trim();
	if !intro.is_empty() {
		html.push_str(&format!("<p>{intro}</p>"));
	}

	if !markers.is_empty() {
		html.push_str("<ol>");
		for (position, &start) in markers.iter().enumerate() {
			let end = markers.get(position + 1).copied().unwrap_or(text.len());
			html.push_str(&format!("<li>{}</li>", strip_marker(&text[start..end])));
		}
		html.push_str("</ol>");
	}

	html
}

/// Byte offsets of every digit run immediately followed by `)`.
fn marker_starts(text: &str) -> Vec<usize> {
	let bytes = text.as_bytes();
	let mut starts = Vec::new();
	let mut i = 0;
	while i < bytes.len() {
		if bytes[i].is_ascii_digit() {
			let start = i;
			while i < bytes.len() && bytes[i].is_ascii_digit() {
				i += 1;
			}
			if bytes.get(i) == Some(&b')') {
				starts.push(start);
			}
		} else {
			i += 1;
		}
	}
	starts
}

/// Drop the leading `<digits>)` marker and surrounding whitespace.
fn strip_marker(fragment: &str) -> &str {
	let digits = fragment
		.bytes()
		.take_while(|byte| byte.is_ascii_digit())
		.count();
	let stripped = if digits > 0 && fragment.as_bytes().get(digits) == Some(&b')') {
		&fragment[digits + 1..]
	} else {
		fragment
	};
	stripped.trim()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::capability_graph::types::{
		ArtifactsRecord, CbbRecord, ObjectivesRecord,
	};

	fn node(id: &str, name: &str) -> NodeRecord {
		serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
	}

	fn tables() -> DetailTables {
		let cbbs: Vec<CbbRecord> = serde_json::from_value(serde_json::json!([
			{ "id": "1", "cbbs": [
				{ "cbb": "Governance", "definition": "Steers the capability." },
				{ "cbb": "Funding", "definition": "Pays for it." },
			] },
		]))
		.unwrap();
		let objectives: Vec<ObjectivesRecord> = serde_json::from_value(serde_json::json!([
			{ "id": "1", "objectives": ["Reduce cost"] },
		]))
		.unwrap();
		let artifacts: Vec<ArtifactsRecord> = serde_json::from_value(serde_json::json!([
			{ "id": "1", "artifacts": ["Budget plan"] },
		]))
		.unwrap();
		DetailTables::build(&cbbs, &objectives, &artifacts)
	}

	#[test]
	fn definition_splits_intro_and_enumerated_items() {
		let html = format_definition(Some("Intro text. 1) first point 2) second point"));
		assert_eq!(
			html,
			"<p>Intro text.</p><ol><li>first point</li><li>second point</li></ol>"
		);
	}

	#[test]
	fn definition_without_markers_is_a_single_paragraph() {
		assert_eq!(
			format_definition(Some("Just prose, no list.")),
			"<p>Just prose, no list.</p>"
		);
	}

	#[test]
	fn definition_starting_with_a_marker_has_no_intro() {
		assert_eq!(
			format_definition(Some("1) only item")),
			"<ol><li>only item</li></ol>"
		);
	}

	#[test]
	fn missing_or_empty_definition_renders_the_placeholder() {
		assert_eq!(format_definition(None), "<p>N/A</p>");
		assert_eq!(format_definition(Some("")), "<p>N/A</p>");
	}

	#[test]
	fn digits_without_a_closing_paren_are_not_markers() {
		assert_eq!(
			format_definition(Some("Founded in 1999 and running.")),
			"<p>Founded in 1999 and running.</p>"
		);
	}

	#[test]
	fn multi_digit_markers_are_stripped_whole() {
		let html = format_definition(Some(
			"Steps: 9) ninth 10) tenth",
		));
		assert_eq!(html, "<p>Steps:</p><ol><li>ninth</li><li>tenth</li></ol>");
	}

	#[test]
	fn panels_render_empty_state_messages() {
		let tables = tables();
		assert!(cbb_panel("absent", &tables).contains("No CBB data found."));
		assert!(objectives_panel("absent", &tables).contains("No objectives listed for this node."));
		assert!(artifacts_panel("absent", &tables).contains("No artifacts listed for this node."));
	}

	#[test]
	fn panels_render_each_entry_in_order() {
		let tables = tables();
		let html = cbb_panel("1", &tables);
		let governance = html.find("Governance").unwrap();
		let funding = html.find("Funding").unwrap();
		assert!(governance < funding);
		assert!(html.contains("<strong>Governance</strong><p>Steers the capability.</p>"));

		assert!(objectives_panel("1", &tables).contains("<div class=\"obj-item\">Reduce cost</div>"));
		assert!(
			artifacts_panel("1", &tables).contains("<div class=\"artifact-item\">Budget plan</div>")
		);
	}

	#[test]
	fn node_panel_falls_back_to_the_clicked_record() {
		let nodes = vec![node("1", "Known")];
		let stray = node("99", "Stray");
		let html = node_panel(&stray, &nodes);
		assert!(html.contains("<h2>Stray</h2>"));
		assert!(html.contains("<strong>ID:</strong> 99"));
	}

	#[test]
	fn node_panel_prefers_the_authoritative_record() {
		let nodes = vec![node("1", "Authoritative")];
		let clicked = node("1", "Clicked copy");
		let html = node_panel(&clicked, &nodes);
		assert!(html.contains("<h2>Authoritative</h2>"));
	}

	#[test]
	fn panel_rendering_is_pure() {
		let tables = tables();
		let nodes = vec![node("1", "Alpha")];
		assert_eq!(node_panel(&nodes[0], &nodes), node_panel(&nodes[0], &nodes));
		assert_eq!(cbb_panel("1", &tables), cbb_panel("1", &tables));
		assert_eq!(objectives_panel("1", &tables), objectives_panel("1", &tables));
		assert_eq!(artifacts_panel("1", &tables), artifacts_panel("1", &tables));
	}
}
