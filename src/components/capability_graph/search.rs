//! Free-text search over the node list.

use super::types::NodeRecord;

/// Result of resolving a query against the node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
	/// Query was empty after trimming; no action.
	EmptyQuery,
	/// First node (stored order) whose name or short name contains the query.
	Match(usize),
	/// No node matched; the caller must leave focus and highlight untouched.
	NoMatch,
}

/// Resolve a query to at most one node.
///
/// Case-insensitive substring match over `name` and `name_short`, first match
/// in stored order wins.
pub fn resolve(query: &str, nodes: &[NodeRecord]) -> SearchOutcome {
	let query = query.trim().to_lowercase();
	if query.is_empty() {
		return SearchOutcome::EmptyQuery;
	}

	for (index, node) in nodes.iter().enumerate() {
		let name = node.name.to_lowercase();
		let short = node
			.name_short
			.as_deref()
			.unwrap_or_default()
			.to_lowercase();
		if name.contains(&query) || short.contains(&query) {
			return SearchOutcome::Match(index);
		}
	}

	SearchOutcome::NoMatch
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, name: &str, name_short: Option<&str>) -> NodeRecord {
		serde_json::from_value(serde_json::json!({
			"id": id,
			"name": name,
			"name_short": name_short,
		}))
		.unwrap()
	}

	#[test]
	fn first_match_in_stored_order_wins() {
		let nodes = vec![node("1", "Alpha", None), node("2", "Alphabet", None)];
		assert_eq!(resolve("alph", &nodes), SearchOutcome::Match(0));
	}

	#[test]
	fn matching_is_case_insensitive() {
		let nodes = vec![node("1", "alpha Core", None)];
		assert_eq!(resolve("ALPHA", &nodes), SearchOutcome::Match(0));
	}

	#[test]
	fn short_name_matches_too() {
		let nodes = vec![
			node("1", "Budget Management", Some("BGM")),
			node("2", "Governance", Some("GOV")),
		];
		assert_eq!(resolve("gov", &nodes), SearchOutcome::Match(1));
	}

	#[test]
	fn queries_are_trimmed() {
		let nodes = vec![node("1", "Alpha", None)];
		assert_eq!(resolve("  alpha  ", &nodes), SearchOutcome::Match(0));
	}

	#[test]
	fn empty_or_whitespace_query_is_a_no_op() {
		let nodes = vec![node("1", "Alpha", None)];
		assert_eq!(resolve("", &nodes), SearchOutcome::EmptyQuery);
		assert_eq!(resolve("   ", &nodes), SearchOutcome::EmptyQuery);
	}

	#[test]
	fn unmatched_query_reports_no_match() {
		let nodes = vec![node("1", "Alpha", None)];
		assert_eq!(resolve("zeta", &nodes), SearchOutcome::NoMatch);
	}
}
