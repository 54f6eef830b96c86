//! The nine-step registration wizard

use super::{
	age_field, appearance_form, default_values, description_form, detail_fields, family_form,
	health_form, religion_fields,
};
use crate::choices::{Gender, Religiosity};
use crate::field::{FieldError, Widget};
use crate::fields::{BooleanField, CharField, ChoiceField, EmailField, PasswordField};
use crate::form::{Form, FormError};
use crate::wizard::{FormWizard, WizardStep};

/// Build the registration wizard: genre, informations de base,
/// informations détaillées, situation familiale, apparence physique,
/// religiosité, santé, descriptions, sécurité.
///
/// Defaults are pre-seeded (`hasChildren = false`, `languages = []`,
/// ...) so the conditional children group starts hidden and the
/// multi-select starts empty.
///
/// # Examples
///
/// ```
/// use zawajuna_forms::flows::registration_wizard;
///
/// let wizard = registration_wizard();
/// assert_eq!(wizard.total_steps(), 9);
/// assert_eq!(wizard.current_step_name(), Some("genre"));
/// ```
pub fn registration_wizard() -> FormWizard {
	let mut wizard = FormWizard::new();

	wizard.add_step(WizardStep::new("genre", gender_form()).with_title("Genre"));
	wizard.add_step(WizardStep::new("base", base_form()).with_title("Informations de base"));
	wizard.add_step(WizardStep::new("details", details_form()).with_title("Informations détaillées"));
	wizard.add_step(WizardStep::new("family", family_form()).with_title("Situation familiale"));
	wizard.add_step(WizardStep::new("appearance", appearance_form()).with_title("Apparence physique"));
	wizard.add_step(WizardStep::new("religion", religion_form()).with_title("Religiosité"));
	wizard.add_step(WizardStep::new("health", health_form()).with_title("Santé"));
	wizard.add_step(WizardStep::new("description", description_form()).with_title("Descriptions"));
	wizard.add_step(WizardStep::new("security", security_form()).with_title("Sécurité"));

	wizard.set_initial(default_values());
	wizard
}

fn gender_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		ChoiceField::new("gender", Gender::ALL.map(|g| g.as_str()))
			.required()
			.with_label("Je suis")
			.with_widget(Widget::RadioGroup)
			.with_error_message("Veuillez sélectionner votre genre"),
	));
	form
}

fn base_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		CharField::new("firstName")
			.required()
			.with_label("Prénom")
			.with_min_length(2)
			.with_error_message("Le prénom doit contenir au moins 2 caractères"),
	));
	form.add_field(Box::new(
		CharField::new("lastName")
			.required()
			.with_label("Nom")
			.with_min_length(2)
			.with_error_message("Le nom doit contenir au moins 2 caractères"),
	));
	form.add_field(Box::new(
		EmailField::new("email")
			.required()
			.with_label("Adresse email")
			.with_error_message("Adresse email invalide"),
	));
	form.add_field(Box::new(age_field()));
	form.add_field(Box::new(
		CharField::new("city")
			.required()
			.with_label("Ville")
			.with_min_length(2)
			.with_error_message("Veuillez indiquer votre ville"),
	));
	form.add_field(Box::new(
		CharField::new("country")
			.required()
			.with_label("Pays")
			.with_min_length(2)
			.with_error_message("Veuillez indiquer votre pays"),
	));
	form
}

fn details_form() -> Form {
	let mut form = Form::new();
	for field in detail_fields() {
		form.add_field(field);
	}
	form
}

fn religion_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		ChoiceField::new("religiosity", Religiosity::ALL.map(|r| r.as_str()))
			.required()
			.with_label("Niveau de religiosité")
			.with_error_message("Veuillez indiquer votre niveau de religiosité"),
	));
	for field in religion_fields() {
		form.add_field(field);
	}
	form
}

fn security_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		PasswordField::new("password")
			.with_label("Mot de passe")
			.with_min_length_message("Le mot de passe doit contenir au moins 8 caractères")
			.with_complexity_message(
				"Le mot de passe doit contenir au moins une minuscule, une majuscule et un chiffre",
			),
	));
	form.add_field(Box::new(
		CharField::new("confirmPassword")
			.required()
			.with_label("Confirmer le mot de passe")
			.with_widget(Widget::PasswordInput)
			.with_error_message("Veuillez confirmer votre mot de passe"),
	));
	form.add_field(Box::new(
		BooleanField::new("acceptTerms")
			.must_be_true()
			.with_label("J'accepte les conditions d'utilisation")
			.with_error_message("Vous devez accepter les conditions d'utilisation"),
	));
	form.add_clean_function(|data| {
		if data.get("password") != data.get("confirmPassword") {
			return Err(FormError::Field {
				field: "confirmPassword".to_string(),
				error: FieldError::Validation(
					"Les mots de passe ne correspondent pas".to_string(),
				),
			});
		}
		Ok(())
	});
	form
}
