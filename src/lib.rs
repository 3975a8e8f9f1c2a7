//! capmap: interactive map of a capability framework.
//!
//! This crate provides a WASM-based dashboard that renders a capability
//! framework as a force-directed node-link graph with click/search selection,
//! connected-neighborhood highlighting, and four per-node detail panels.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement, Window};

pub mod components;

pub use components::capability_graph::{
	ArtifactsRecord, CapabilityGraph, CbbRecord, DashboardData, GraphRecords, ObjectivesRecord,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("capmap: logging initialized");
}

/// Errors raised while assembling the dashboard's input tables.
///
/// Any of these aborts graph construction for the session: the error is
/// surfaced once and no partial interactive state is built.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
	/// A data script element is missing from the page.
	#[error("missing data element #{0}")]
	MissingElement(&'static str),
	/// A data script element holds unparseable JSON.
	#[error("failed to parse #{element}: {source}")]
	Parse {
		/// Element id of the offending table.
		element: &'static str,
		/// Underlying serde error.
		#[source]
		source: serde_json::Error,
	},
	/// The graph table loaded but has no nodes or no links.
	#[error("graph data is empty: nodes and links are both required")]
	EmptyGraph,
}

/// Parse one embedded JSON table from a script element by id.
fn parse_table<T: DeserializeOwned>(
	document: &Document,
	element_id: &'static str,
) -> Result<T, DataError> {
	let element = document
		.get_element_by_id(element_id)
		.ok_or(DataError::MissingElement(element_id))?;
	let script: HtmlScriptElement = element
		.dyn_into()
		.map_err(|_| DataError::MissingElement(element_id))?;
	let json_text = script
		.text()
		.map_err(|_| DataError::MissingElement(element_id))?;

	serde_json::from_str(&json_text).map_err(|source| DataError::Parse {
		element: element_id,
		source,
	})
}

/// Load the four input tables from their embedded script elements.
///
/// Loaded as a unit before any interaction is wired up: a failure in any one
/// table aborts the whole load.
///
/// Expected elements: `#graph-data` with `{ nodes: [...], links: [...] }`,
/// `#cbb-data`, `#objectives-data`, and `#artifacts-data` with their
/// respective record arrays.
pub fn load_dashboard_data() -> Result<DashboardData, DataError> {
	let window: Window = web_sys::window().ok_or(DataError::MissingElement("window"))?;
	let document = window
		.document()
		.ok_or(DataError::MissingElement("document"))?;

	let graph: GraphRecords = parse_table(&document, "graph-data")?;
	let cbbs: Vec<CbbRecord> = parse_table(&document, "cbb-data")?;
	let objectives: Vec<ObjectivesRecord> = parse_table(&document, "objectives-data")?;
	let artifacts: Vec<ArtifactsRecord> = parse_table(&document, "artifacts-data")?;

	if graph.nodes.is_empty() || graph.links.is_empty() {
		return Err(DataError::EmptyGraph);
	}

	info!(
		"capmap: loaded {} nodes, {} links, {} CBB records, {} objective records, {} artifact records",
		graph.nodes.len(),
		graph.links.len(),
		cbbs.len(),
		objectives.len(),
		artifacts.len()
	);

	Ok(DashboardData {
		graph,
		cbbs,
		objectives,
		artifacts,
	})
}

/// Main application component.
///
/// Loads the four data tables and renders the dashboard, or a single error
/// view when any table fails to load.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let dashboard = load_dashboard_data();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Capability Map" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{match dashboard {
			Ok(data) => view! {
				<div class="capability-app">
					<CapabilityGraph data=data />
				</div>
			}
			.into_any(),
			Err(err) => {
				error!("capmap: {err}");
				view! {
					<div class="load-error">
						<h1>"Capability Map"</h1>
						<p>"Data not loaded correctly: " {err.to_string()}</p>
					</div>
				}
				.into_any()
			}
		}}
	}
}
