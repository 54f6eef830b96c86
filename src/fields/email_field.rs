//! Email field

use crate::field::{FieldError, FieldResult, FormField, Widget};
use regex::Regex;
use std::sync::LazyLock;

// Permissive address shape: one "@", non-empty local part, dotted domain.
// Deliverability is the submission collaborator's concern.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Email address field.
#[derive(Debug, Clone)]
pub struct EmailField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub error_message: Option<String>,
}

impl EmailField {
	/// Create a new `EmailField` with the given name.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::fields::EmailField;
	/// use zawajuna_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = EmailField::new("email").required();
	/// assert!(field.clean(Some(&json!("amina@example.com"))).is_ok());
	/// assert!(field.clean(Some(&json!("not-an-email"))).is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			error_message: None,
		}
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
		self.error_message = Some(message.into());
		self
	}
}

impl FormField for EmailField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn widget(&self) -> Widget {
		Widget::EmailInput
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let raw = match value {
			Some(v) if !v.is_null() => v
				.as_str()
				.ok_or_else(|| FieldError::Validation("Value must be a string".to_string()))?
				.trim(),
			_ => "",
		};

		if raw.is_empty() {
			if self.required {
				return Err(match &self.error_message {
					Some(msg) => FieldError::Validation(msg.clone()),
					None => FieldError::Required,
				});
			}
			return Ok(serde_json::Value::String(String::new()));
		}

		if !EMAIL_REGEX.is_match(raw) {
			return Err(match &self.error_message {
				Some(msg) => FieldError::Validation(msg.clone()),
				None => FieldError::Validation("Enter a valid email address".to_string()),
			});
		}

		Ok(serde_json::Value::String(raw.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("user@example.com")]
	#[case("prenom.nom@mail.fr")]
	#[case("u+tag@sub.domain.org")]
	fn test_email_field_valid(#[case] email: &str) {
		// Arrange
		let field = EmailField::new("email").required();

		// Act & Assert
		assert!(field.clean(Some(&json!(email))).is_ok(), "expected '{email}' to be valid");
	}

	#[rstest]
	#[case("")]
	#[case("plainaddress")]
	#[case("missing@tld")]
	#[case("two@@example.com")]
	#[case("spaces in@example.com")]
	fn test_email_field_invalid(#[case] email: &str) {
		// Arrange
		let field = EmailField::new("email").required();

		// Act & Assert
		assert!(field.clean(Some(&json!(email))).is_err(), "expected '{email}' to be invalid");
	}

	#[rstest]
	fn test_email_field_custom_message() {
		// Arrange
		let field = EmailField::new("email")
			.required()
			.with_error_message("Adresse email invalide");

		// Act
		let err = field.clean(Some(&json!("nope"))).unwrap_err();

		// Assert
		assert_eq!(err.to_string(), "Adresse email invalide");
	}
}
