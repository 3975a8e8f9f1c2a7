//! Selection state machine.
//!
//! Owns the single piece of interaction state: which node, if any, is
//! focused. Pointer and search handlers feed [`FocusEvent`]s through
//! [`transition`], which returns the next focus plus the ordered side-effect
//! commands to run. Every other component only ever reads the focus value.

/// The current selection: at most one node, by array position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
	/// Nothing selected.
	#[default]
	Idle,
	/// One node selected.
	Focused(usize),
}

impl Focus {
	/// The focused node index, if any.
	pub fn node(self) -> Option<usize> {
		match self {
			Focus::Idle => None,
			Focus::Focused(index) => Some(index),
		}
	}
}

/// An external trigger the state machine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusEvent {
	/// Pointer click resolved to a node.
	NodeClick(usize),
	/// Pointer click on empty background.
	BackgroundClick,
	/// Search resolved to a matching node.
	SearchMatch(usize),
}

/// A side-effect command emitted by a transition, to be executed in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
	/// Recompute highlight classes for a focused node.
	ApplyHighlight(usize),
	/// Return every element to the neutral, unclassified style.
	ClearHighlight,
	/// Render the node detail panel.
	ShowNodePanel(usize),
	/// Render the building blocks panel.
	ShowCbbPanel(usize),
	/// Render the objectives panel.
	ShowObjectivesPanel(usize),
	/// Render the artifacts panel.
	ShowArtifactsPanel(usize),
	/// Return all four panels to their placeholder text.
	ResetPanels,
	/// Smoothly center the view on a node. Visual only; never alters focus.
	CenterOn(usize),
}

/// Highlight first, then the four panels in their fixed order. Panels render
/// independently; an empty result in one never blocks the rest.
fn focus_effects(index: usize) -> Vec<Effect> {
	vec![
		Effect::ApplyHighlight(index),
		Effect::ShowNodePanel(index),
		Effect::ShowCbbPanel(index),
		Effect::ShowObjectivesPanel(index),
		Effect::ShowArtifactsPanel(index),
	]
}

fn reset_effects() -> Vec<Effect> {
	vec![Effect::ResetPanels, Effect::ClearHighlight]
}

/// Compute the next focus and the side effects for one event.
///
/// Clicking the focused node toggles back to idle; clicking a different node
/// switches focus in one atomic transition, with no intermediate reset. A
/// search match never toggles off: it clears stale highlight state, reruns the
/// full focus pipeline even for the already-focused node, and centers the view
/// last.
pub fn transition(focus: Focus, event: FocusEvent) -> (Focus, Vec<Effect>) {
	match event {
		FocusEvent::NodeClick(index) => match focus {
			Focus::Focused(current) if current == index => (Focus::Idle, reset_effects()),
			_ => (Focus::Focused(index), focus_effects(index)),
		},
		FocusEvent::BackgroundClick => match focus {
			Focus::Focused(_) => (Focus::Idle, reset_effects()),
			Focus::Idle => (Focus::Idle, Vec::new()),
		},
		FocusEvent::SearchMatch(index) => {
			let mut effects = vec![Effect::ClearHighlight];
			effects.extend(focus_effects(index));
			effects.push(Effect::CenterOn(index));
			(Focus::Focused(index), effects)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn click_while_idle_focuses_and_runs_the_full_pipeline() {
		let (focus, effects) = transition(Focus::Idle, FocusEvent::NodeClick(2));
		assert_eq!(focus, Focus::Focused(2));
		assert_eq!(
			effects,
			vec![
				Effect::ApplyHighlight(2),
				Effect::ShowNodePanel(2),
				Effect::ShowCbbPanel(2),
				Effect::ShowObjectivesPanel(2),
				Effect::ShowArtifactsPanel(2),
			]
		);
	}

	#[test]
	fn clicking_the_focused_node_toggles_back_to_idle() {
		let (focus, effects) = transition(Focus::Focused(2), FocusEvent::NodeClick(2));
		assert_eq!(focus, Focus::Idle);
		assert_eq!(effects, vec![Effect::ResetPanels, Effect::ClearHighlight]);
	}

	#[test]
	fn focus_switch_is_atomic() {
		let (focus, effects) = transition(Focus::Focused(1), FocusEvent::NodeClick(3));
		assert_eq!(focus, Focus::Focused(3));
		assert!(!effects.contains(&Effect::ResetPanels));
		assert!(!effects.contains(&Effect::ClearHighlight));
		assert_eq!(effects[0], Effect::ApplyHighlight(3));
	}

	#[test]
	fn background_click_resets_only_when_focused() {
		let (focus, effects) = transition(Focus::Focused(1), FocusEvent::BackgroundClick);
		assert_eq!(focus, Focus::Idle);
		assert_eq!(effects, vec![Effect::ResetPanels, Effect::ClearHighlight]);

		let (focus, effects) = transition(Focus::Idle, FocusEvent::BackgroundClick);
		assert_eq!(focus, Focus::Idle);
		assert!(effects.is_empty());
	}

	#[test]
	fn search_clears_stale_state_first_and_centers_last() {
		let (focus, effects) = transition(Focus::Focused(1), FocusEvent::SearchMatch(4));
		assert_eq!(focus, Focus::Focused(4));
		assert_eq!(effects.first(), Some(&Effect::ClearHighlight));
		assert_eq!(effects.last(), Some(&Effect::CenterOn(4)));
	}

	#[test]
	fn search_match_on_the_focused_node_does_not_toggle_off() {
		let (focus, effects) = transition(Focus::Focused(4), FocusEvent::SearchMatch(4));
		assert_eq!(focus, Focus::Focused(4));
		assert!(effects.contains(&Effect::ApplyHighlight(4)));
		assert!(!effects.contains(&Effect::ResetPanels));
	}
}
