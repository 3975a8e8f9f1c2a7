//! Per-node lookup tables for the three detail record sets.

use std::collections::HashMap;

use super::types::{ArtifactsRecord, CbbEntry, CbbRecord, ObjectivesRecord};

/// Node-id keyed lookups for building blocks, objectives, and artifacts.
///
/// Built once from the loaded record arrays, one linear pass each. Duplicate
/// ids are last-write-wins; ids with no record read as empty slices so panel
/// rendering stays total.
#[derive(Clone, Debug, Default)]
pub struct DetailTables {
	cbbs: HashMap<String, Vec<CbbEntry>>,
	objectives: HashMap<String, Vec<String>>,
	artifacts: HashMap<String, Vec<String>>,
}

impl DetailTables {
	/// Build all three lookups from the loaded record arrays.
	pub fn build(
		cbbs: &[CbbRecord],
		objectives: &[ObjectivesRecord],
		artifacts: &[ArtifactsRecord],
	) -> Self {
		let mut tables = Self::default();
		for record in cbbs {
			tables.cbbs.insert(record.id.clone(), record.cbbs.clone());
		}
		for record in objectives {
			tables
				.objectives
				.insert(record.id.clone(), record.objectives.clone());
		}
		for record in artifacts {
			tables
				.artifacts
				.insert(record.id.clone(), record.artifacts.clone());
		}
		tables
	}

	/// Building blocks for a node id, empty when none are recorded.
	pub fn cbbs_for(&self, id: &str) -> &[CbbEntry] {
		self.cbbs.get(id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Objectives for a node id, empty when none are recorded.
	pub fn objectives_for(&self, id: &str) -> &[String] {
		self.objectives.get(id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Artifacts for a node id, empty when none are recorded.
	pub fn artifacts_for(&self, id: &str) -> &[String] {
		self.artifacts.get(id).map(Vec::as_slice).unwrap_or(&[])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn objectives(id: &str, items: &[&str]) -> ObjectivesRecord {
		serde_json::from_value(serde_json::json!({ "id": id, "objectives": items })).unwrap()
	}

	#[test]
	fn missing_ids_read_as_empty() {
		let tables = DetailTables::build(&[], &[], &[]);
		assert!(tables.cbbs_for("absent").is_empty());
		assert!(tables.objectives_for("absent").is_empty());
		assert!(tables.artifacts_for("absent").is_empty());
	}

	#[test]
	fn duplicate_ids_are_last_write_wins() {
		let tables = DetailTables::build(
			&[],
			&[objectives("1", &["first"]), objectives("1", &["second"])],
			&[],
		);
		assert_eq!(tables.objectives_for("1"), ["second".to_string()]);
	}

	#[test]
	fn entries_keep_record_order() {
		let tables = DetailTables::build(&[], &[objectives("1", &["a", "b", "c"])], &[]);
		assert_eq!(
			tables.objectives_for("1"),
			["a".to_string(), "b".to_string(), "c".to_string()]
		);
	}
}
