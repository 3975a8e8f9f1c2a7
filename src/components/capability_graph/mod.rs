//! Interactive capability framework map.
//!
//! Renders a node-link graph of capabilities on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, and node dragging interactions
//! - Click and search selection with connected-neighborhood highlighting
//! - Four per-node detail panels (overview, building blocks, objectives,
//!   artifacts)
//!
//! The selection pipeline is the same for clicks and search matches: the
//! state machine in [`focus`] decides the new focus and emits ordered side
//! effects, [`highlight`] reprojects element classes, and [`detail`] renders
//! the panels — all from the one focus value.

pub mod detail;
pub mod focus;
pub mod highlight;
pub mod layout;
pub mod scale;
pub mod search;
pub mod tables;
pub mod theme;
pub mod types;

mod component;
mod render;
mod state;

pub use component::CapabilityGraph;
pub use theme::Theme;
pub use types::{
	ArtifactsRecord, CbbEntry, CbbRecord, DashboardData, EdgeRecord, GraphRecords, NodeRecord,
	ObjectivesRecord,
};
