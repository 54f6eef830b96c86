//! Boolean field for checkboxes

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Checkbox field. An absent value cleans to `false`; `must_be_true`
/// turns the field into an acceptance gate (terms of use).
#[derive(Debug, Clone)]
pub struct BooleanField {
	pub name: String,
	pub label: Option<String>,
	pub help_text: Option<String>,
	pub must_be_true: bool,
	pub error_message: Option<String>,
}

impl BooleanField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			help_text: None,
			must_be_true: false,
			error_message: None,
		}
	}

	/// Require the box to be checked.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::fields::BooleanField;
	/// use zawajuna_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = BooleanField::new("acceptTerms")
	///     .must_be_true()
	///     .with_error_message("Vous devez accepter les conditions d'utilisation");
	///
	/// assert!(field.clean(Some(&json!(true))).is_ok());
	/// assert!(field.clean(Some(&json!(false))).is_err());
	/// assert!(field.clean(None).is_err());
	/// ```
	pub fn must_be_true(mut self) -> Self {
		self.must_be_true = true;
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

impl FormField for BooleanField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.must_be_true
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn widget(&self) -> Widget {
		Widget::Checkbox
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let checked = match value {
			Some(v) if !v.is_null() => v
				.as_bool()
				.ok_or_else(|| FieldError::Validation("Value must be a boolean".to_string()))?,
			_ => false,
		};

		if self.must_be_true && !checked {
			return Err(match &self.error_message {
				Some(msg) => FieldError::Validation(msg.clone()),
				None => FieldError::Validation("This box must be checked".to_string()),
			});
		}

		Ok(serde_json::json!(checked))
	}
}
