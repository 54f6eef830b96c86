use crate::bound_field::BoundField;
use crate::field::{FieldError, FormField, VisibilityFn};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Field error in {field}: {error}")]
	Field { field: String, error: FieldError },
	#[error("Validation error: {0}")]
	Validation(String),
}

pub type FormResult<T> = Result<T, FormError>;

type CleanFunction =
	Box<dyn Fn(&HashMap<String, serde_json::Value>) -> FormResult<()> + Send + Sync>;

/// Key under which form-level (non-field-specific) errors are recorded.
pub const ALL_FIELDS_KEY: &str = "_all";

/// A set of fields validated together: one screen of a wizard, or a
/// standalone form such as the login page.
///
/// Fields may be grouped under a visibility predicate evaluated against
/// the bound data; hidden fields are exempt from validation and keep
/// whatever value they hold.
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
	visibility: HashMap<String, Arc<VisibilityFn>>,
	data: HashMap<String, serde_json::Value>,
	initial: HashMap<String, serde_json::Value>,
	errors: HashMap<String, Vec<String>>,
	is_bound: bool,
	clean_functions: Vec<CleanFunction>,
}

impl Form {
	/// Create a new empty form.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::Form;
	///
	/// let form = Form::new();
	/// assert!(!form.is_bound());
	/// assert_eq!(form.field_count(), 0);
	/// ```
	pub fn new() -> Self {
		Self {
			fields: vec![],
			visibility: HashMap::new(),
			data: HashMap::new(),
			initial: HashMap::new(),
			errors: HashMap::new(),
			is_bound: false,
			clean_functions: vec![],
		}
	}

	/// Create a new form with initial data.
	pub fn with_initial(initial: HashMap<String, serde_json::Value>) -> Self {
		Self {
			initial,
			..Self::new()
		}
	}

	/// Add a field to the form.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::{Form, fields::CharField};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("firstName").required()));
	/// assert_eq!(form.field_count(), 1);
	/// ```
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	/// Add a group of fields visible only while `predicate` holds over
	/// the bound data. Hidden fields are skipped during validation and
	/// their stored values are retained.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::{Form, fields::{BooleanField, IntegerField}};
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(BooleanField::new("hasChildren")));
	/// form.add_conditional_group(
	///     vec![Box::new(IntegerField::new("numberOfBoys").with_min_value(0))],
	///     |values| values.get("hasChildren").and_then(|v| v.as_bool()).unwrap_or(false),
	/// );
	///
	/// let mut data = HashMap::new();
	/// data.insert("hasChildren".to_string(), json!(false));
	/// data.insert("numberOfBoys".to_string(), json!(-3));
	/// form.bind(data);
	///
	/// // Hidden group never blocks validation.
	/// assert!(form.is_valid());
	/// ```
	pub fn add_conditional_group<F>(&mut self, fields: Vec<Box<dyn FormField>>, predicate: F)
	where
		F: Fn(&HashMap<String, serde_json::Value>) -> bool + Send + Sync + 'static,
	{
		let predicate: Arc<VisibilityFn> = Arc::new(predicate);
		for field in fields {
			self.visibility
				.insert(field.name().to_string(), Arc::clone(&predicate));
			self.fields.push(field);
		}
	}

	/// Add a cross-field validation function, run after per-field rules.
	///
	/// Return [`FormError::Field`] to attribute the failure to a specific
	/// field (the password-confirmation pattern), or
	/// [`FormError::Validation`] for a form-level error recorded under
	/// [`ALL_FIELDS_KEY`].
	pub fn add_clean_function<F>(&mut self, f: F)
	where
		F: Fn(&HashMap<String, serde_json::Value>) -> FormResult<()> + Send + Sync + 'static,
	{
		self.clean_functions.push(Box::new(f));
	}

	/// Bind data for validation.
	pub fn bind(&mut self, data: HashMap<String, serde_json::Value>) {
		self.data = data;
		self.is_bound = true;
	}

	/// Validate all visible fields, then the cross-field functions.
	///
	/// Cleaned values replace the raw ones in the bound data; errors are
	/// recorded per field and the method returns whether the map stayed
	/// empty.
	pub fn is_valid(&mut self) -> bool {
		if !self.is_bound {
			return false;
		}

		self.errors.clear();

		for field in &self.fields {
			let name = field.name();
			if let Some(predicate) = self.visibility.get(name)
				&& !predicate(&self.data)
			{
				continue;
			}

			match field.clean(self.data.get(name)) {
				Ok(cleaned) => {
					self.data.insert(name.to_string(), cleaned);
				}
				Err(e) => {
					self.errors
						.entry(name.to_string())
						.or_default()
						.push(e.to_string());
				}
			}
		}

		for clean_fn in &self.clean_functions {
			if let Err(e) = clean_fn(&self.data) {
				match e {
					FormError::Field { field, error } => {
						self.errors.entry(field).or_default().push(error.to_string());
					}
					FormError::Validation(msg) => {
						self.errors
							.entry(ALL_FIELDS_KEY.to_string())
							.or_default()
							.push(msg);
					}
				}
			}
		}

		self.errors.is_empty()
	}

	/// Re-check a single field against `values`: its own rule first, then
	/// the clean functions, keeping only the messages attributed to it.
	///
	/// This is the immediate-feedback path: a field correction should
	/// clear its message only once every rule naming that field passes,
	/// including cross-field ones (password confirmation).
	pub fn check_field(
		&self,
		name: &str,
		values: &HashMap<String, serde_json::Value>,
	) -> Vec<String> {
		let Some(field) = self.get_field(name) else {
			return vec![];
		};

		let cleaned = match field.clean(values.get(name)) {
			Ok(cleaned) => cleaned,
			Err(e) => return vec![e.to_string()],
		};

		let mut data = values.clone();
		data.insert(name.to_string(), cleaned);

		let mut messages = vec![];
		for clean_fn in &self.clean_functions {
			if let Err(FormError::Field { field, error }) = clean_fn(&data)
				&& field == name
			{
				messages.push(error.to_string());
			}
		}
		messages
	}

	/// Whether `name` is currently visible given `values`.
	pub fn is_field_visible(
		&self,
		name: &str,
		values: &HashMap<String, serde_json::Value>,
	) -> bool {
		match self.visibility.get(name) {
			Some(predicate) => predicate(values),
			None => true,
		}
	}

	/// Names of the fields visible for `values`, in declaration order.
	pub fn visible_fields(&self, values: &HashMap<String, serde_json::Value>) -> Vec<&str> {
		self.fields
			.iter()
			.map(|f| f.name())
			.filter(|name| self.is_field_visible(name, values))
			.collect()
	}

	/// Names of all declared fields, visible or not, in declaration order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|f| f.name())
	}

	pub fn cleaned_data(&self) -> &HashMap<String, serde_json::Value> {
		&self.data
	}

	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}

	pub fn is_bound(&self) -> bool {
		self.is_bound
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	pub fn initial(&self) -> &HashMap<String, serde_json::Value> {
		&self.initial
	}

	pub fn set_initial(&mut self, initial: HashMap<String, serde_json::Value>) {
		self.initial = initial;
	}

	/// Whether any field's bound value differs from its initial value.
	/// The profile editor uses this to enable its Save button.
	pub fn has_changed(&self) -> bool {
		if !self.is_bound {
			return false;
		}

		self.fields.iter().any(|field| {
			let initial = self.initial.get(field.name());
			let data = self.data.get(field.name());
			field.has_changed(initial, data)
		})
	}

	/// Read view of a single field with its current value and errors.
	pub fn bound_field<'a>(&'a self, name: &str) -> Option<BoundField<'a>> {
		let field = self.get_field(name)?;
		let data = self.data.get(name);
		let errors = self.errors.get(name).map(|e| e.as_slice()).unwrap_or(&[]);
		Some(BoundField::new(field, data, errors))
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}
