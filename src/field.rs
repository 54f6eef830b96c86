//! Field trait and error types shared by all form fields

use std::collections::HashMap;

/// Error produced when a single field value violates its rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("This field is required")]
	Required,
	#[error("{0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// The form control a field is rendered with.
///
/// The library performs no rendering itself; the widget is read by the
/// presentation layer to pick the matching input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
	TextInput,
	TextArea,
	NumberInput,
	EmailInput,
	PasswordInput,
	Select,
	Checkbox,
	CheckboxGroup,
	RadioGroup,
}

/// A single named input value collected by a form.
///
/// Implementations hold their declarative rules (length bounds, numeric
/// range, choice membership) and enforce them in [`FormField::clean`],
/// which receives the raw bound value and returns the cleaned value or a
/// [`FieldError`].
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str> {
		None
	}

	fn required(&self) -> bool;

	fn help_text(&self) -> Option<&str> {
		None
	}

	fn widget(&self) -> Widget;

	fn initial(&self) -> Option<&serde_json::Value> {
		None
	}

	/// Validate and normalize a raw bound value.
	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value>;

	/// Whether the bound value differs from the initial value.
	fn has_changed(
		&self,
		initial: Option<&serde_json::Value>,
		data: Option<&serde_json::Value>,
	) -> bool {
		initial != data
	}
}

/// Predicate deciding whether a field group is visible given the current
/// values. Hidden fields are exempt from validation; their stored values
/// are retained.
pub type VisibilityFn = dyn Fn(&HashMap<String, serde_json::Value>) -> bool + Send + Sync;
