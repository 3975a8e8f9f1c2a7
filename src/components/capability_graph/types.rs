//! Input record types for the capability framework tables.
//!
//! Ids in the source tables arrive as either JSON strings or numbers; every
//! record type coerces them into the canonical string id space at
//! deserialization time, before any lookup or simulation step sees them.

use serde::{Deserialize, Deserializer};

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum RawId {
		Text(String),
		Number(serde_json::Number),
	}

	Ok(match RawId::deserialize(deserializer)? {
		RawId::Text(text) => text,
		RawId::Number(number) => number.to_string(),
	})
}

fn optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum RawId {
		Text(String),
		Number(serde_json::Number),
	}

	Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
		RawId::Text(text) => text,
		RawId::Number(number) => number.to_string(),
	}))
}

/// A capability node.
#[derive(Clone, Debug, Deserialize)]
pub struct NodeRecord {
	/// Unique identifier, stable for the session. Referenced by edges and by
	/// the three detail tables.
	#[serde(deserialize_with = "id_string")]
	pub id: String,
	/// Full display name.
	pub name: String,
	/// Short display name, preferred for graph labels when present.
	#[serde(default)]
	pub name_short: Option<String>,
	/// Categorical grouping; drives node color.
	#[serde(default, deserialize_with = "optional_id_string")]
	pub group: Option<String>,
	/// Overview paragraph for the detail panel.
	#[serde(default)]
	pub overview: Option<String>,
	/// Goal paragraph for the detail panel.
	#[serde(default)]
	pub goal: Option<String>,
	/// Free definition text, possibly containing an embedded `1) ... 2) ...`
	/// enumerated list.
	#[serde(default)]
	pub definitions: Option<String>,
}

/// An edge between two capability nodes, by id.
#[derive(Clone, Debug, Deserialize)]
pub struct EdgeRecord {
	/// Source node id.
	#[serde(deserialize_with = "id_string")]
	pub source: String,
	/// Target node id.
	#[serde(deserialize_with = "id_string")]
	pub target: String,
}

/// Node and edge lists, as loaded.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphRecords {
	/// All capability nodes, in stored order. Search resolution and palette
	/// assignment depend on this order.
	pub nodes: Vec<NodeRecord>,
	/// All edges between nodes.
	pub links: Vec<EdgeRecord>,
}

/// One core building block with its definition text.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CbbEntry {
	/// Building block name.
	pub cbb: String,
	/// Definition text.
	pub definition: String,
}

/// Core building blocks for one node.
#[derive(Clone, Debug, Deserialize)]
pub struct CbbRecord {
	/// Node id this record belongs to.
	#[serde(deserialize_with = "id_string")]
	pub id: String,
	/// Ordered building block entries; absent arrays read as empty.
	#[serde(default)]
	pub cbbs: Vec<CbbEntry>,
}

/// Objectives for one node.
#[derive(Clone, Debug, Deserialize)]
pub struct ObjectivesRecord {
	/// Node id this record belongs to.
	#[serde(deserialize_with = "id_string")]
	pub id: String,
	/// Ordered objective blurbs; absent arrays read as empty.
	#[serde(default)]
	pub objectives: Vec<String>,
}

/// Artifacts for one node.
#[derive(Clone, Debug, Deserialize)]
pub struct ArtifactsRecord {
	/// Node id this record belongs to.
	#[serde(deserialize_with = "id_string")]
	pub id: String,
	/// Ordered artifact blurbs; absent arrays read as empty.
	#[serde(default)]
	pub artifacts: Vec<String>,
}

/// The four loaded input tables, validated as a unit before any interaction
/// is wired up.
#[derive(Clone, Debug, Default)]
pub struct DashboardData {
	/// Nodes and edges.
	pub graph: GraphRecords,
	/// Core building blocks per node.
	pub cbbs: Vec<CbbRecord>,
	/// Objectives per node.
	pub objectives: Vec<ObjectivesRecord>,
	/// Artifacts per node.
	pub artifacts: Vec<ArtifactsRecord>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numeric_and_string_ids_normalize_to_the_same_key() {
		let numeric: NodeRecord = serde_json::from_str(r#"{"id": 1, "name": "Alpha"}"#).unwrap();
		let text: NodeRecord = serde_json::from_str(r#"{"id": "1", "name": "Alpha"}"#).unwrap();
		assert_eq!(numeric.id, "1");
		assert_eq!(numeric.id, text.id);
	}

	#[test]
	fn edge_endpoints_normalize_like_node_ids() {
		let edge: EdgeRecord = serde_json::from_str(r#"{"source": 3, "target": "7"}"#).unwrap();
		assert_eq!(edge.source, "3");
		assert_eq!(edge.target, "7");
	}

	#[test]
	fn numeric_groups_become_categorical_keys() {
		let node: NodeRecord =
			serde_json::from_str(r#"{"id": "a", "name": "Alpha", "group": 2}"#).unwrap();
		assert_eq!(node.group.as_deref(), Some("2"));
	}

	#[test]
	fn absent_detail_arrays_default_to_empty() {
		let record: CbbRecord = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
		assert!(record.cbbs.is_empty());
		let record: ObjectivesRecord = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
		assert!(record.objectives.is_empty());
	}
}
