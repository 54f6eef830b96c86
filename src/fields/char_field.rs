//! Character field for text input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Text field with length validation.
///
/// Lengths are counted in characters, not bytes, so multi-byte input
/// (Arabic, accented French, emoji) is bounded correctly.
#[derive(Debug, Clone)]
pub struct CharField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub max_length: Option<usize>,
	pub min_length: Option<usize>,
	pub strip: bool,
	pub error_message: Option<String>,
}

impl CharField {
	/// Create a new `CharField` with the given name.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::fields::CharField;
	///
	/// let field = CharField::new("firstName");
	/// assert_eq!(field.name, "firstName");
	/// assert!(!field.required);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			help_text: None,
			widget: Widget::TextInput,
			initial: None,
			max_length: None,
			min_length: None,
			strip: true,
			error_message: None,
		}
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

	/// Disable whitespace stripping.
	pub fn no_strip(mut self) -> Self {
		self.strip = false;
		self
	}

	/// Override the message reported for any rule violation on this field.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::fields::CharField;
	/// use zawajuna_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = CharField::new("city")
	///     .required()
	///     .with_min_length(2)
	///     .with_error_message("Veuillez indiquer votre ville");
	///
	/// let err = field.clean(Some(&json!("P"))).unwrap_err();
	/// assert_eq!(err.to_string(), "Veuillez indiquer votre ville");
	/// ```
	pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
		self.error_message = Some(message.into());
		self
	}

	fn violation(&self, default: String) -> FieldError {
		match &self.error_message {
			Some(msg) => FieldError::Validation(msg.clone()),
			None => FieldError::Validation(default),
		}
	}
}

impl FormField for CharField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn widget(&self) -> Widget {
		self.widget
	}

	fn initial(&self) -> Option<&serde_json::Value> {
		self.initial.as_ref()
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let str_value = match value {
			Some(v) if !v.is_null() => Some(
				v.as_str()
					.ok_or_else(|| FieldError::Validation("Value must be a string".to_string()))?,
			),
			_ => None,
		};

		let processed = match str_value {
			Some(v) => {
				let v = if self.strip { v.trim() } else { v };
				if v.is_empty() {
					if self.required {
						return Err(match &self.error_message {
							Some(msg) => FieldError::Validation(msg.clone()),
							None => FieldError::Required,
						});
					}
					return Ok(serde_json::Value::String(String::new()));
				}
				v.to_string()
			}
			None => {
				if self.required {
					return Err(match &self.error_message {
						Some(msg) => FieldError::Validation(msg.clone()),
						None => FieldError::Required,
					});
				}
				return Ok(serde_json::Value::String(String::new()));
			}
		};

		// Character count, not byte count.
		let char_count = processed.chars().count();
		if let Some(min_length) = self.min_length
			&& char_count < min_length
		{
			return Err(self.violation(format!(
				"Ensure this value has at least {} characters (it has {})",
				min_length, char_count
			)));
		}

		if let Some(max_length) = self.max_length
			&& char_count > max_length
		{
			return Err(self.violation(format!(
				"Ensure this value has at most {} characters (it has {})",
				max_length, char_count
			)));
		}

		Ok(serde_json::Value::String(processed))
	}
}
