//! Registration flow tests
//!
//! End-to-end scenarios driving the nine-step registration wizard the
//! way the signup screen does.

use rstest::rstest;
use serde_json::json;
use std::collections::HashMap;
use zawajuna_forms::flows::registration_wizard;
use zawajuna_forms::FormWizard;

/// Fill every step with values that pass validation. Passwords are set
/// last so individual tests can override them before submitting.
fn fill_valid(wizard: &mut FormWizard) {
	wizard.set_field("gender", json!("homme"));

	wizard.set_field("firstName", json!("Yusuf"));
	wizard.set_field("lastName", json!("Benali"));
	wizard.set_field("email", json!("yusuf.benali@example.com"));
	wizard.set_field("age", json!(30));
	wizard.set_field("city", json!("Paris"));
	wizard.set_field("country", json!("France"));

	wizard.set_field("profession", json!("Ingénieur"));
	wizard.set_field("origin", json!("Maroc"));
	wizard.set_field("nationality", json!("France"));
	wizard.set_field("residenceCountry", json!("France"));
	wizard.toggle_multi_select("languages", "Français", true);
	wizard.toggle_multi_select("languages", "Arabe", true);

	wizard.set_field("maritalStatus", json!("celibataire"));

	wizard.set_field("height", json!("1m80"));
	wizard.set_field("ethnicity", json!("Arabe"));
	wizard.set_field("bodyType", json!("Normal"));
	wizard.set_field("clothingStyle", json!("Qamis et vêtements amples au quotidien"));

	wizard.set_field("religiosity", json!("pratiquant"));
	wizard.set_field("followsMinhaj", json!("oui"));
	wizard.set_field("hijraProject", json!("moyen_terme"));
	wizard.set_field(
		"scholarsFollowed",
		json!("Cheikh al-Fawzan et Cheikh Raslan"),
	);
	wizard.set_field("yearsOfPractice", json!(8));

	wizard.set_field(
		"physicalHealth",
		json!("Bonne santé physique et morale, sportif régulier"),
	);

	wizard.set_field(
		"personalDescription",
		json!("Homme posé et travailleur, attaché à la science religieuse et à la vie de famille."),
	);
	wizard.set_field(
		"partnerDescription",
		json!("Je recherche une épouse pratiquante, douce et patiente, désireuse de fonder un foyer."),
	);
	wizard.set_field(
		"dealBreakers",
		json!("Le manque de sérieux dans la pratique religieuse."),
	);

	wizard.set_field("password", json!("Abcdef12"));
	wizard.set_field("confirmPassword", json!("Abcdef12"));
	wizard.set_field("acceptTerms", json!(true));
}

#[rstest]
fn test_full_registration_delivers_one_complete_payload() {
	let mut wizard = registration_wizard();
	fill_valid(&mut wizard);

	let mut payloads: Vec<HashMap<String, serde_json::Value>> = vec![];
	let mut sink = |payload: HashMap<String, serde_json::Value>| payloads.push(payload);

	assert!(wizard.submit(&mut sink));
	assert_eq!(payloads.len(), 1);
	let payload = &payloads[0];

	// Every declared field is present, including hidden conditional ones.
	let declared: usize = wizard
		.steps()
		.iter()
		.map(|s| s.form.field_names().count())
		.sum();
	assert_eq!(payload.len(), declared);

	assert_eq!(payload.get("gender"), Some(&json!("homme")));
	assert_eq!(payload.get("languages"), Some(&json!(["Français", "Arabe"])));
	assert_eq!(payload.get("acceptTerms"), Some(&json!(true)));

	// Children group hidden the whole way: seeded defaults and null for
	// the never-touched field.
	assert_eq!(payload.get("hasChildren"), Some(&json!(false)));
	assert_eq!(payload.get("numberOfBoys"), Some(&json!(0)));
	assert_eq!(payload.get("numberOfGirls"), Some(&json!(0)));
	assert_eq!(payload.get("childrenAges"), Some(&serde_json::Value::Null));
}

#[rstest]
fn test_mismatched_passwords_jump_to_security_step() {
	let mut wizard = registration_wizard();
	fill_valid(&mut wizard);
	wizard.set_field("confirmPassword", json!("Abcdef99"));

	let mut deliveries = 0usize;
	let mut sink = |_: HashMap<String, serde_json::Value>| deliveries += 1;

	assert!(!wizard.submit(&mut sink));
	assert_eq!(deliveries, 0);

	// Security is the only invalid step, so the wizard lands there.
	assert_eq!(wizard.current_step_name(), Some("security"));
	assert_eq!(wizard.step_number(), 9);
	assert_eq!(
		wizard.errors().get("confirmPassword"),
		Some(&vec!["Les mots de passe ne correspondent pas".to_string()])
	);
}

#[rstest]
fn test_password_mismatch_error_persists_until_values_match() {
	let mut wizard = registration_wizard();
	fill_valid(&mut wizard);
	wizard.set_field("confirmPassword", json!("Abcdef99"));

	let mut sink = |_: HashMap<String, serde_json::Value>| {};
	assert!(!wizard.submit(&mut sink));

	// Typing another mismatching value must not clear the message.
	wizard.set_field("confirmPassword", json!("Abcdef00"));
	assert_eq!(
		wizard.errors().get("confirmPassword"),
		Some(&vec!["Les mots de passe ne correspondent pas".to_string()])
	);

	wizard.set_field("confirmPassword", json!("Abcdef12"));
	assert!(!wizard.errors().contains_key("confirmPassword"));

	let mut payloads = 0usize;
	let mut sink = |_: HashMap<String, serde_json::Value>| payloads += 1;
	assert!(wizard.submit(&mut sink));
	assert_eq!(payloads, 1);
}

#[rstest]
fn test_submit_jumps_to_earliest_invalid_step() {
	let mut wizard = registration_wizard();
	fill_valid(&mut wizard);
	wizard.set_field("email", json!("not-an-email"));
	wizard.set_field("confirmPassword", json!("Abcdef99"));

	let mut sink = |_: HashMap<String, serde_json::Value>| {};
	assert!(!wizard.submit(&mut sink));

	// Both base and security fail; the earlier one wins.
	assert_eq!(wizard.current_step_name(), Some("base"));
	assert!(wizard.errors().contains_key("email"));
	assert!(wizard.errors().contains_key("confirmPassword"));
}

#[rstest]
fn test_language_toggle_keeps_ordered_unique_selection() {
	let mut wizard = registration_wizard();

	wizard.toggle_multi_select("languages", "Arabe", true);
	wizard.toggle_multi_select("languages", "Français", true);
	wizard.toggle_multi_select("languages", "Arabe", false);

	assert_eq!(wizard.value("languages"), Some(&json!(["Français"])));
}

#[rstest]
fn test_age_error_appears_then_clears_on_correction() {
	let mut wizard = registration_wizard();
	wizard.set_field("gender", json!("femme"));
	assert!(wizard.next_step());

	wizard.set_field("firstName", json!("Amina"));
	wizard.set_field("lastName", json!("Diallo"));
	wizard.set_field("email", json!("amina@example.com"));
	wizard.set_field("age", json!(15));
	wizard.set_field("city", json!("Lyon"));
	wizard.set_field("country", json!("France"));

	assert!(!wizard.next_step());
	assert_eq!(wizard.current_step_name(), Some("base"));
	assert_eq!(
		wizard.errors().get("age"),
		Some(&vec!["Vous devez avoir au moins 18 ans".to_string()])
	);

	// Correcting the value clears the message without navigating.
	wizard.set_field("age", json!(25));
	assert!(!wizard.errors().contains_key("age"));
	assert!(wizard.next_step());
	assert_eq!(wizard.current_step_name(), Some("details"));
}

#[rstest]
fn test_children_fields_block_only_while_visible() {
	let mut wizard = registration_wizard();
	fill_valid(&mut wizard);

	// Walk to the family step.
	for _ in 0..3 {
		assert!(wizard.next_step());
	}
	assert_eq!(wizard.current_step_name(), Some("family"));

	wizard.set_field("hasChildren", json!(true));
	wizard.set_field("numberOfBoys", json!(-2));
	assert!(!wizard.next_step());
	assert!(wizard.errors().contains_key("numberOfBoys"));

	// Hiding the group exempts the bad value and keeps it stored.
	wizard.set_field("hasChildren", json!(false));
	assert!(wizard.next_step());
	assert_eq!(wizard.value("numberOfBoys"), Some(&json!(-2)));
}

#[rstest]
fn test_navigation_is_clamped_at_both_ends() {
	let mut wizard = registration_wizard();
	fill_valid(&mut wizard);

	assert!(!wizard.previous_step());
	assert_eq!(wizard.current_step(), 0);

	while !wizard.is_last_step() {
		assert!(wizard.next_step());
	}
	assert_eq!(wizard.step_number(), wizard.total_steps());

	assert!(!wizard.next_step());
	assert_eq!(wizard.step_number(), wizard.total_steps());
}

#[rstest]
fn test_back_navigation_preserves_entered_values() {
	let mut wizard = registration_wizard();
	wizard.set_field("gender", json!("homme"));
	assert!(wizard.next_step());

	wizard.set_field("firstName", json!("Yusuf"));
	assert!(wizard.previous_step());
	assert!(wizard.is_first_step());

	// Values survive the round trip.
	assert_eq!(wizard.value("firstName"), Some(&json!("Yusuf")));
	assert_eq!(wizard.value("gender"), Some(&json!("homme")));
}

#[rstest]
fn test_reset_returns_to_seeded_state() {
	let mut wizard = registration_wizard();
	fill_valid(&mut wizard);
	assert!(wizard.next_step());

	wizard.reset();

	assert!(wizard.is_first_step());
	assert!(wizard.errors().is_empty());
	assert_eq!(wizard.value("firstName"), None);
	assert_eq!(wizard.value("hasChildren"), Some(&json!(false)));
	assert_eq!(wizard.value("languages"), Some(&json!([])));
}
