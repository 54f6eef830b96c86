use crate::field::{FormField, Widget};

/// Read view of a field bound to its current value and errors.
///
/// This is what the presentation layer consumes to render one input:
/// the field's metadata, the value to show, and the inline error text.
pub struct BoundField<'a> {
	field: &'a dyn FormField,
	data: Option<&'a serde_json::Value>,
	errors: &'a [String],
}

impl<'a> BoundField<'a> {
	pub fn new(
		field: &'a dyn FormField,
		data: Option<&'a serde_json::Value>,
		errors: &'a [String],
	) -> Self {
		Self { field, data, errors }
	}

	pub fn name(&self) -> &str {
		self.field.name()
	}

	pub fn label(&self) -> Option<&str> {
		self.field.label()
	}

	/// The bound value, falling back to the field's initial value.
	pub fn value(&self) -> Option<&serde_json::Value> {
		self.data.or_else(|| self.field.initial())
	}

	pub fn errors(&self) -> &[String] {
		self.errors
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	pub fn widget(&self) -> Widget {
		self.field.widget()
	}

	pub fn help_text(&self) -> Option<&str> {
		self.field.help_text()
	}

	pub fn is_required(&self) -> bool {
		self.field.required()
	}
}
