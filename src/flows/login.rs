//! The login form

use crate::fields::{EmailField, PasswordField};
use crate::form::Form;

/// Build the single-screen login form. Credential checking happens
/// server-side; this only gates obviously malformed input, so the
/// password rule is length-only.
///
/// # Examples
///
/// ```
/// use zawajuna_forms::flows::login_form;
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let mut form = login_form();
/// let mut data = HashMap::new();
/// data.insert("email".to_string(), json!("amina@example.com"));
/// data.insert("password".to_string(), json!("secret"));
/// form.bind(data);
///
/// assert!(form.is_valid());
/// ```
pub fn login_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		EmailField::new("email")
			.required()
			.with_label("Adresse email")
			.with_error_message("Adresse email invalide"),
	));
	form.add_field(Box::new(
		PasswordField::new("password")
			.length_only()
			.with_min_length(6)
			.with_label("Mot de passe")
			.with_min_length_message("Le mot de passe doit contenir au moins 6 caractères"),
	));
	form
}
