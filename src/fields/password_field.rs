//! Password field with complexity rules

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Password field enforcing a minimum length and character-class
/// complexity (at least one lowercase letter, one uppercase letter and
/// one digit). The classes are checked by scanning characters rather
/// than regex look-ahead, which the `regex` crate does not support.
#[derive(Debug, Clone)]
pub struct PasswordField {
	pub name: String,
	pub label: Option<String>,
	pub min_length: usize,
	pub require_lowercase: bool,
	pub require_uppercase: bool,
	pub require_digit: bool,
	pub min_length_message: Option<String>,
	pub complexity_message: Option<String>,
}

impl PasswordField {
	/// Create a password field with the default policy (length >= 8,
	/// lowercase + uppercase + digit required).
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::fields::PasswordField;
	/// use zawajuna_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = PasswordField::new("password");
	/// assert!(field.clean(Some(&json!("Abcdef12"))).is_ok());
	/// assert!(field.clean(Some(&json!("abcdef12"))).is_err()); // no uppercase
	/// assert!(field.clean(Some(&json!("Abc12"))).is_err()); // too short
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			min_length: 8,
			require_lowercase: true,
			require_uppercase: true,
			require_digit: true,
			min_length_message: None,
			complexity_message: None,
		}
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = min_length;
		self
	}

	/// Length-only policy, for flows that predate the complexity rules
	/// (the login form only checks a minimum of 6 characters).
	pub fn length_only(mut self) -> Self {
		self.require_lowercase = false;
		self.require_uppercase = false;
		self.require_digit = false;
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_min_length_message(mut self, message: impl Into<String>) -> Self {
		self.min_length_message = Some(message.into());
		self
	}

	pub fn with_complexity_message(mut self, message: impl Into<String>) -> Self {
		self.complexity_message = Some(message.into());
		self
	}
}

impl FormField for PasswordField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		true
	}

	fn widget(&self) -> Widget {
		Widget::PasswordInput
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let raw = match value {
			Some(v) if !v.is_null() => v
				.as_str()
				.ok_or_else(|| FieldError::Validation("Value must be a string".to_string()))?,
			_ => "",
		};

		if raw.is_empty() {
			return Err(FieldError::Required);
		}

		if raw.chars().count() < self.min_length {
			let msg = self.min_length_message.clone().unwrap_or_else(|| {
				format!("Ensure this password has at least {} characters", self.min_length)
			});
			return Err(FieldError::Validation(msg));
		}

		let missing_lower = self.require_lowercase && !raw.chars().any(|c| c.is_lowercase());
		let missing_upper = self.require_uppercase && !raw.chars().any(|c| c.is_uppercase());
		let missing_digit = self.require_digit && !raw.chars().any(|c| c.is_ascii_digit());

		if missing_lower || missing_upper || missing_digit {
			let msg = self.complexity_message.clone().unwrap_or_else(|| {
				"Password must contain at least one lowercase letter, one uppercase letter and one digit"
					.to_string()
			});
			return Err(FieldError::Validation(msg));
		}

		Ok(serde_json::Value::String(raw.to_string()))
	}
}
