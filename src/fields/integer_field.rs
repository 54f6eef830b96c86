//! Integer field for numeric input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Whole-number field with range validation.
#[derive(Debug, Clone)]
pub struct IntegerField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub initial: Option<serde_json::Value>,
	pub min_value: Option<i64>,
	pub max_value: Option<i64>,
	pub min_message: Option<String>,
	pub max_message: Option<String>,
}

impl IntegerField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			help_text: None,
			initial: None,
			min_value: None,
			max_value: None,
			min_message: None,
			max_message: None,
		}
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_min_value(mut self, min: i64) -> Self {
		self.min_value = Some(min);
		self
	}

	pub fn with_max_value(mut self, max: i64) -> Self {
		self.max_value = Some(max);
		self
	}

	/// Message reported when the value is below the minimum.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::fields::IntegerField;
	/// use zawajuna_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = IntegerField::new("age")
	///     .required()
	///     .with_min_value(18)
	///     .with_min_message("Vous devez avoir au moins 18 ans");
	///
	/// let err = field.clean(Some(&json!(15))).unwrap_err();
	/// assert_eq!(err.to_string(), "Vous devez avoir au moins 18 ans");
	/// ```
	pub fn with_min_message(mut self, message: impl Into<String>) -> Self {
		self.min_message = Some(message.into());
		self
	}

	/// Message reported when the value is above the maximum.
	pub fn with_max_message(mut self, message: impl Into<String>) -> Self {
		self.max_message = Some(message.into());
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
}

impl FormField for IntegerField {
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
		Widget::NumberInput
	}

	fn initial(&self) -> Option<&serde_json::Value> {
		self.initial.as_ref()
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let number = match value {
			Some(v) if !v.is_null() => Some(
				v.as_i64()
					.ok_or_else(|| FieldError::Validation("Value must be a whole number".to_string()))?,
			),
			_ => None,
		};

		let number = match number {
			Some(n) => n,
			None => {
				if self.required {
					return Err(FieldError::Required);
				}
				return Ok(serde_json::Value::Null);
			}
		};

		if let Some(min) = self.min_value
			&& number < min
		{
			let msg = self
				.min_message
				.clone()
				.unwrap_or_else(|| format!("Ensure this value is at least {} (it is {})", min, number));
			return Err(FieldError::Validation(msg));
		}

		if let Some(max) = self.max_value
			&& number > max
		{
			let msg = self
				.max_message
				.clone()
				.unwrap_or_else(|| format!("Ensure this value is at most {} (it is {})", max, number));
			return Err(FieldError::Validation(msg));
		}

		Ok(serde_json::json!(number))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(17, false)]
	#[case(18, true)]
	#[case(80, true)]
	#[case(81, false)]
	fn test_integer_field_range(#[case] value: i64, #[case] ok: bool) {
		// Arrange
		let field = IntegerField::new("age")
			.required()
			.with_min_value(18)
			.with_max_value(80);

		// Act & Assert
		assert_eq!(field.clean(Some(&json!(value))).is_ok(), ok);
	}

	#[rstest]
	fn test_integer_field_distinct_range_messages() {
		// Arrange
		let field = IntegerField::new("age")
			.required()
			.with_min_value(18)
			.with_min_message("Vous devez avoir au moins 18 ans")
			.with_max_value(80)
			.with_max_message("Âge maximum 80 ans");

		// Act & Assert
		assert_eq!(
			field.clean(Some(&json!(15))).unwrap_err().to_string(),
			"Vous devez avoir au moins 18 ans"
		);
		assert_eq!(
			field.clean(Some(&json!(99))).unwrap_err().to_string(),
			"Âge maximum 80 ans"
		);
	}

	#[rstest]
	fn test_integer_field_optional_missing_is_null() {
		// Arrange
		let field = IntegerField::new("numberOfBoys").with_min_value(0);

		// Act & Assert
		assert_eq!(field.clean(None).unwrap(), serde_json::Value::Null);
	}

	#[rstest]
	fn test_integer_field_required_missing() {
		// Arrange
		let field = IntegerField::new("age").required();

		// Act & Assert
		assert_eq!(field.clean(None).unwrap_err(), FieldError::Required);
	}

	#[rstest]
	fn test_integer_field_rejects_non_number() {
		// Arrange
		let field = IntegerField::new("age").required();

		// Act & Assert
		assert!(field.clean(Some(&json!("twenty"))).is_err());
	}
}
