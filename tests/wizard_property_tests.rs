//! Wizard property-based tests
//!
//! Property-based tests for multi-select toggling and navigation
//! clamping on the registration wizard.

use proptest::prelude::*;
use serde_json::json;
use zawajuna_forms::choices::LANGUAGES;
use zawajuna_forms::flows::registration_wizard;

fn language(index: usize) -> &'static str {
	LANGUAGES[index % LANGUAGES.len()]
}

proptest! {
	/// Test: multi-select stays an ordered set
	///
	/// Category: Property
	/// Verifies that after any toggle sequence the selection holds no
	/// duplicates and only known options.
	#[test]
	fn prop_toggle_sequence_keeps_selection_unique(
		toggles in prop::collection::vec((0usize..LANGUAGES.len(), any::<bool>()), 0..40)
	) {
		let mut wizard = registration_wizard();

		for (index, included) in toggles {
			wizard.toggle_multi_select("languages", language(index), included);
		}

		let selection = wizard.value("languages").and_then(|v| v.as_array()).cloned().unwrap_or_default();
		let mut seen = std::collections::HashSet::new();
		for item in &selection {
			prop_assert!(item.is_string());
			let s = item.as_str().unwrap();
			prop_assert!(LANGUAGES.contains(&s));
			prop_assert!(seen.insert(s.to_string()), "duplicate selection: {}", s);
		}
	}

	/// Test: toggling an option off undoes toggling it on
	///
	/// Category: Property
	/// Verifies that an add immediately followed by a remove restores
	/// the previous selection.
	#[test]
	fn prop_toggle_on_then_off_restores_selection(
		setup in prop::collection::vec((0usize..LANGUAGES.len(), any::<bool>()), 0..20),
		probe in 0usize..LANGUAGES.len(),
	) {
		let mut wizard = registration_wizard();
		for (index, included) in setup {
			wizard.toggle_multi_select("languages", language(index), included);
		}
		let option = language(probe);
		wizard.toggle_multi_select("languages", option, false);

		let before = wizard.value("languages").cloned();
		wizard.toggle_multi_select("languages", option, true);
		wizard.toggle_multi_select("languages", option, false);

		prop_assert_eq!(wizard.value("languages").cloned(), before);
	}

	/// Test: toggling is idempotent in both directions
	///
	/// Category: Property
	/// Verifies that repeating the same toggle changes nothing.
	#[test]
	fn prop_toggle_is_idempotent(
		probe in 0usize..LANGUAGES.len(),
		included in any::<bool>(),
	) {
		let mut wizard = registration_wizard();
		let option = language(probe);

		wizard.toggle_multi_select("languages", option, included);
		let once = wizard.value("languages").cloned();
		wizard.toggle_multi_select("languages", option, included);

		prop_assert_eq!(wizard.value("languages").cloned(), once);
	}

	/// Test: navigation never leaves the step range
	///
	/// Category: Property
	/// Verifies that any mix of forward and backward navigation keeps
	/// the current step within bounds, whatever the validation state.
	#[test]
	fn prop_navigation_stays_in_bounds(moves in prop::collection::vec(any::<bool>(), 0..60)) {
		let mut wizard = registration_wizard();
		wizard.set_field("gender", json!("homme"));

		for forward in moves {
			if forward {
				wizard.next_step();
			} else {
				wizard.previous_step();
			}
			prop_assert!(wizard.current_step() < wizard.total_steps());
		}
	}

	/// Test: blocked advancement records at least one error
	///
	/// Category: Property
	/// Verifies that when next_step refuses to move on a non-final step,
	/// an error message explains why.
	#[test]
	fn prop_blocked_advancement_is_explained(moves in prop::collection::vec(any::<bool>(), 1..30)) {
		let mut wizard = registration_wizard();

		for forward in moves {
			let at_last = wizard.is_last_step();
			if forward {
				if !wizard.next_step() && !at_last {
					prop_assert!(!wizard.errors().is_empty());
				}
			} else {
				wizard.previous_step();
			}
		}
	}
}
