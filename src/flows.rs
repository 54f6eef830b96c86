//! The concrete Zawajuna flows: registration, profile editing, login
//!
//! Field names, validation bounds and French messages mirror the
//! product's form schemas. Sections shared between registration and
//! profile editing are built once here.

mod login;
mod profile;
mod registration;

pub use login::login_form;
pub use profile::profile_wizard;
pub use registration::registration_wizard;

use crate::choices::{
	BODY_TYPES, COUNTRIES, ETHNICITIES, FollowsMinhaj, HijraProject, LANGUAGES, MaritalStatus,
};
use crate::field::{FormField, Widget};
use crate::fields::{BooleanField, CharField, ChoiceField, IntegerField, MultipleChoiceField};
use crate::form::Form;
use std::collections::HashMap;

pub(crate) fn has_children(values: &HashMap<String, serde_json::Value>) -> bool {
	values
		.get("hasChildren")
		.and_then(|v| v.as_bool())
		.unwrap_or(false)
}

/// Defaults seeded before any input, matching the product's form
/// default values.
pub(crate) fn default_values() -> HashMap<String, serde_json::Value> {
	let mut defaults = HashMap::new();
	defaults.insert("hasChildren".to_string(), serde_json::json!(false));
	defaults.insert("childrenInCharge".to_string(), serde_json::json!(false));
	defaults.insert("numberOfBoys".to_string(), serde_json::json!(0));
	defaults.insert("numberOfGirls".to_string(), serde_json::json!(0));
	defaults.insert("languages".to_string(), serde_json::json!([]));
	defaults
}

pub(crate) fn age_field() -> IntegerField {
	IntegerField::new("age")
		.required()
		.with_label("Âge")
		.with_min_value(18)
		.with_min_message("Vous devez avoir au moins 18 ans")
		.with_max_value(80)
		.with_max_message("Âge maximum 80 ans")
}

/// Profession, origin, nationality, residence country and spoken
/// languages ("informations détaillées").
pub(crate) fn detail_fields() -> Vec<Box<dyn FormField>> {
	vec![
		Box::new(
			CharField::new("profession")
				.required()
				.with_label("Votre métier")
				.with_min_length(2)
				.with_error_message("Veuillez indiquer votre métier"),
		),
		Box::new(
			ChoiceField::new("origin", COUNTRIES.iter().copied())
				.required()
				.with_label("Votre origine")
				.with_error_message("Veuillez indiquer votre origine"),
		),
		Box::new(
			ChoiceField::new("nationality", COUNTRIES.iter().copied())
				.required()
				.with_label("Votre nationalité")
				.with_error_message("Veuillez indiquer votre nationalité"),
		),
		Box::new(
			ChoiceField::new("residenceCountry", COUNTRIES.iter().copied())
				.required()
				.with_label("Pays de résidence")
				.with_error_message("Veuillez indiquer votre pays de résidence"),
		),
		Box::new(
			MultipleChoiceField::new("languages", LANGUAGES.iter().copied())
				.with_label("Langues parlées")
				.with_min_selections(1)
				.with_error_message("Veuillez sélectionner au moins une langue"),
		),
	]
}

/// Marital status plus the children group, visible only when
/// `hasChildren` is checked.
pub(crate) fn family_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		ChoiceField::new(
			"maritalStatus",
			MaritalStatus::ALL.map(|s| s.as_str()),
		)
		.required()
		.with_label("Situation maritale")
		.with_error_message("Veuillez indiquer votre situation maritale"),
	));
	form.add_field(Box::new(
		BooleanField::new("hasChildren").with_label("Avez-vous des enfants ?"),
	));
	form.add_conditional_group(
		vec![
			Box::new(
				IntegerField::new("numberOfBoys")
					.with_label("Nombre de garçons")
					.with_min_value(0),
			),
			Box::new(
				IntegerField::new("numberOfGirls")
					.with_label("Nombre de filles")
					.with_min_value(0),
			),
			Box::new(BooleanField::new("childrenInCharge").with_label("Enfants à charge ?")),
			Box::new(
				CharField::new("childrenAges")
					.with_label("Précisez leurs âges")
					.with_widget(Widget::TextArea),
			),
		],
		has_children,
	);
	form
}

pub(crate) fn appearance_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		CharField::new("height")
			.required()
			.with_label("Votre taille ?")
			.with_help_text("Ne pas donner votre poids")
			.with_error_message("Veuillez indiquer votre taille"),
	));
	form.add_field(Box::new(
		ChoiceField::new("ethnicity", ETHNICITIES.iter().copied())
			.required()
			.with_label("Ethnie")
			.with_error_message("Veuillez indiquer votre ethnie"),
	));
	form.add_field(Box::new(
		ChoiceField::new("bodyType", BODY_TYPES.iter().copied())
			.required()
			.with_label("Votre morphologie")
			.with_error_message("Veuillez indiquer votre morphologie"),
	));
	form.add_field(Box::new(
		CharField::new("clothingStyle")
			.required()
			.with_label("Votre tenue vestimentaire")
			.with_widget(Widget::TextArea)
			.with_min_length(10)
			.with_error_message("Veuillez décrire votre style vestimentaire"),
	));
	form
}

/// Minhaj, hijra project, scholars and years of practice. The
/// religiosity level itself only appears on the registration flow.
pub(crate) fn religion_fields() -> Vec<Box<dyn FormField>> {
	vec![
		Box::new(
			ChoiceField::new(
				"followsMinhaj",
				FollowsMinhaj::ALL.map(|s| s.as_str()),
			)
			.required()
			.with_label("Suivez-vous le minhaj salafi ?")
			.with_widget(Widget::RadioGroup)
			.with_error_message("Veuillez indiquer si vous suivez le minhaj salafi"),
		),
		Box::new(
			ChoiceField::new("hijraProject", HijraProject::ALL.map(|s| s.as_str()))
				.required()
				.with_label("Projet Hijra")
				.with_error_message("Veuillez indiquer votre projet hijra"),
		),
		Box::new(
			CharField::new("scholarsFollowed")
				.required()
				.with_label("Savants suivis")
				.with_help_text("Veuillez citer des noms")
				.with_widget(Widget::TextArea)
				.with_min_length(5)
				.with_error_message("Veuillez citer les savants que vous suivez"),
		),
		Box::new(
			IntegerField::new("yearsOfPractice")
				.required()
				.with_label("Religion pratiquée sérieusement depuis quand (années) ?")
				.with_min_value(0)
				.with_min_message("Veuillez indiquer depuis combien d'années vous pratiquez"),
		),
	]
}

pub(crate) fn health_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		CharField::new("physicalHealth")
			.required()
			.with_label("Votre santé physique / morale")
			.with_widget(Widget::TextArea)
			.with_min_length(10)
			.with_error_message("Veuillez décrire votre santé physique/morale"),
	));
	form.add_field(Box::new(
		CharField::new("hiddenIllnesses")
			.with_label("Maladie occulte")
			.with_widget(Widget::TextArea),
	));
	form
}

pub(crate) fn description_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		CharField::new("personalDescription")
			.required()
			.with_label("Qui vous êtes ?")
			.with_widget(Widget::TextArea)
			.with_min_length(50)
			.with_error_message("Veuillez vous décrire en au moins 50 caractères"),
	));
	form.add_field(Box::new(
		CharField::new("partnerDescription")
			.required()
			.with_label("Ce que vous cherchez chez le/la prétendant(e)")
			.with_widget(Widget::TextArea)
			.with_min_length(50)
			.with_error_message("Veuillez décrire ce que vous cherchez en au moins 50 caractères"),
	));
	form.add_field(Box::new(
		CharField::new("dealBreakers")
			.required()
			.with_label("Mes critères rédhibitoires")
			.with_widget(Widget::TextArea)
			.with_min_length(20)
			.with_error_message("Veuillez indiquer vos critères rédhibitoires"),
	));
	form
}
