//! The profile editing wizard

use super::{
	age_field, appearance_form, default_values, description_form, detail_fields, family_form,
	health_form, religion_fields,
};
use crate::form::Form;
use crate::wizard::{FormWizard, WizardStep};

/// Build the six-section profile editor: informations personnelles,
/// situation familiale, apparence physique, religiosité, santé,
/// descriptions.
///
/// Identity and credentials are fixed at registration and absent here;
/// seed the subscriber's saved profile through
/// [`set_initial`](FormWizard::set_initial) so `has_changed` reflects
/// actual edits.
///
/// # Examples
///
/// ```
/// use zawajuna_forms::flows::profile_wizard;
///
/// let wizard = profile_wizard();
/// assert_eq!(wizard.total_steps(), 6);
/// assert_eq!(wizard.current_step_name(), Some("personal"));
/// ```
pub fn profile_wizard() -> FormWizard {
	let mut wizard = FormWizard::new();

	wizard.add_step(WizardStep::new("personal", personal_form()).with_title("Informations personnelles"));
	wizard.add_step(WizardStep::new("family", family_form()).with_title("Situation familiale"));
	wizard.add_step(WizardStep::new("appearance", appearance_form()).with_title("Apparence physique"));
	wizard.add_step(WizardStep::new("religion", religion_form()).with_title("Religiosité"));
	wizard.add_step(WizardStep::new("health", health_form()).with_title("Santé"));
	wizard.add_step(WizardStep::new("description", description_form()).with_title("Descriptions"));

	wizard.set_initial(default_values());
	wizard
}

fn personal_form() -> Form {
	let mut fields = detail_fields();
	fields.insert(1, Box::new(age_field()));

	let mut form = Form::new();
	for field in fields {
		form.add_field(field);
	}
	form
}

fn religion_form() -> Form {
	let mut form = Form::new();
	for field in religion_fields() {
		form.add_field(field);
	}
	form
}
