//! Single- and multiple-choice fields

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Field whose value must be one of an enumerated set of options.
#[derive(Debug, Clone)]
pub struct ChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub choices: Vec<String>,
	pub widget: Widget,
	pub error_message: Option<String>,
}

impl ChoiceField {
	/// Create a choice field over the given options.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::fields::ChoiceField;
	/// use zawajuna_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = ChoiceField::new("gender", ["homme", "femme"]).required();
	/// assert!(field.clean(Some(&json!("femme"))).is_ok());
	/// assert!(field.clean(Some(&json!("autre"))).is_err());
	/// ```
	pub fn new<I, S>(name: impl Into<String>, choices: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			name: name.into(),
			label: None,
			required: false,
			choices: choices.into_iter().map(Into::into).collect(),
			widget: Widget::Select,
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

	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

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

impl FormField for ChoiceField {
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
		self.widget
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let raw = match value {
			Some(v) if !v.is_null() => v
				.as_str()
				.ok_or_else(|| FieldError::Validation("Value must be a string".to_string()))?,
			_ => "",
		};

		if raw.is_empty() {
			if self.required {
				return Err(match &self.error_message {
					Some(msg) => FieldError::Validation(msg.clone()),
					None => FieldError::Required,
				});
			}
			return Ok(serde_json::Value::Null);
		}

		if !self.choices.iter().any(|c| c == raw) {
			return Err(self.violation(format!(
				"Select a valid choice: '{}' is not one of the available choices",
				raw
			)));
		}

		Ok(serde_json::Value::String(raw.to_string()))
	}
}

/// Multi-select field backed by an ordered set: each option appears at
/// most once, in the order the user first selected it.
#[derive(Debug, Clone)]
pub struct MultipleChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub choices: Vec<String>,
	pub min_selections: Option<usize>,
	pub error_message: Option<String>,
}

impl MultipleChoiceField {
	/// Create a multiple-choice field over the given options.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::fields::MultipleChoiceField;
	/// use zawajuna_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = MultipleChoiceField::new("languages", ["Français", "Arabe", "Anglais"])
	///     .with_min_selections(1);
	///
	/// assert!(field.clean(Some(&json!(["Arabe", "Français"]))).is_ok());
	/// assert!(field.clean(Some(&json!([]))).is_err());
	/// ```
	pub fn new<I, S>(name: impl Into<String>, choices: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			name: name.into(),
			label: None,
			choices: choices.into_iter().map(Into::into).collect(),
			min_selections: None,
			error_message: None,
		}
	}

	pub fn with_min_selections(mut self, min: usize) -> Self {
		self.min_selections = Some(min);
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

impl FormField for MultipleChoiceField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.min_selections.is_some_and(|min| min > 0)
	}

	fn widget(&self) -> Widget {
		Widget::CheckboxGroup
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let items = match value {
			Some(v) if !v.is_null() => v
				.as_array()
				.ok_or_else(|| FieldError::Validation("Value must be a list".to_string()))?
				.as_slice(),
			_ => &[],
		};

		// Dedup while preserving first-selection order.
		let mut selected: Vec<String> = Vec::with_capacity(items.len());
		for item in items {
			let s = item
				.as_str()
				.ok_or_else(|| FieldError::Validation("Value must be a list of strings".to_string()))?;
			if !self.choices.iter().any(|c| c == s) {
				return Err(match &self.error_message {
					Some(msg) => FieldError::Validation(msg.clone()),
					None => FieldError::Validation(format!(
						"Select a valid choice: '{}' is not one of the available choices",
						s
					)),
				});
			}
			if !selected.iter().any(|existing| existing == s) {
				selected.push(s.to_string());
			}
		}

		if let Some(min) = self.min_selections
			&& selected.len() < min
		{
			return Err(match &self.error_message {
				Some(msg) => FieldError::Validation(msg.clone()),
				None => FieldError::Validation(format!("Select at least {} option(s)", min)),
			});
		}

		Ok(serde_json::json!(selected))
	}
}
