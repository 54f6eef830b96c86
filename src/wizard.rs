use crate::form::{ALL_FIELDS_KEY, Form};
use std::collections::HashMap;

/// Opaque collaborator receiving the validated payload on submission.
///
/// Persistence and network transmission happen behind this boundary;
/// the wizard only guarantees the payload passed full validation.
pub trait SubmissionSink {
	fn deliver(&mut self, payload: HashMap<String, serde_json::Value>);
}

impl<F> SubmissionSink for F
where
	F: FnMut(HashMap<String, serde_json::Value>),
{
	fn deliver(&mut self, payload: HashMap<String, serde_json::Value>) {
		self(payload)
	}
}

/// A single step of a wizard: a named screen showing one [`Form`].
pub struct WizardStep {
	pub name: String,
	pub title: Option<String>,
	pub form: Form,
}

impl WizardStep {
	pub fn new(name: impl Into<String>, form: Form) -> Self {
		Self {
			name: name.into(),
			title: None,
			form,
		}
	}

	/// Human-readable step label shown by the progress header.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}
}

/// Multi-step form controller.
///
/// Owns the current step index, the values accumulated across all steps,
/// and the per-field validation errors. Forward navigation is gated on
/// the current step's visible fields being valid; backward navigation is
/// always permitted. Navigation outside the step range is silently
/// clamped. All state transitions are synchronous; the wizard performs
/// no I/O.
///
/// # Examples
///
/// ```
/// use zawajuna_forms::{Form, FormWizard, WizardStep, fields::CharField};
/// use serde_json::json;
///
/// let mut form = Form::new();
/// form.add_field(Box::new(CharField::new("firstName").required()));
///
/// let mut wizard = FormWizard::new();
/// wizard.add_step(WizardStep::new("base", form));
/// wizard.add_step(WizardStep::new("details", Form::new()));
///
/// assert!(!wizard.next_step()); // firstName missing
/// assert!(wizard.errors().contains_key("firstName"));
///
/// wizard.set_field("firstName", json!("Yusuf"));
/// assert!(wizard.next_step());
/// assert_eq!(wizard.current_step(), 1);
/// ```
pub struct FormWizard {
	steps: Vec<WizardStep>,
	current_step: usize,
	values: HashMap<String, serde_json::Value>,
	initial: HashMap<String, serde_json::Value>,
	errors: HashMap<String, Vec<String>>,
}

impl FormWizard {
	pub fn new() -> Self {
		Self {
			steps: vec![],
			current_step: 0,
			values: HashMap::new(),
			initial: HashMap::new(),
			errors: HashMap::new(),
		}
	}

	pub fn add_step(&mut self, step: WizardStep) {
		self.steps.push(step);
	}

	/// Seed default values present before any user input
	/// (`hasChildren = false`, `languages = []`, ...). Also the state
	/// restored by [`reset`](Self::reset).
	pub fn set_initial(&mut self, initial: HashMap<String, serde_json::Value>) {
		self.values = initial.clone();
		self.initial = initial;
	}

	pub fn steps(&self) -> &[WizardStep] {
		&self.steps
	}

	/// Zero-based index of the current step.
	pub fn current_step(&self) -> usize {
		self.current_step
	}

	/// One-based step number, for "Étape {n} sur {total}" headers.
	pub fn step_number(&self) -> usize {
		self.current_step + 1
	}

	pub fn current_step_name(&self) -> Option<&str> {
		self.steps.get(self.current_step).map(|s| s.name.as_str())
	}

	pub fn current_step_title(&self) -> Option<&str> {
		self.steps.get(self.current_step).and_then(|s| s.title.as_deref())
	}

	pub fn total_steps(&self) -> usize {
		self.steps.len()
	}

	pub fn is_first_step(&self) -> bool {
		self.current_step == 0
	}

	pub fn is_last_step(&self) -> bool {
		self.current_step + 1 >= self.steps.len()
	}

	pub fn progress_percentage(&self) -> f32 {
		if self.steps.is_empty() {
			return 0.0;
		}
		((self.current_step + 1) as f32 / self.steps.len() as f32) * 100.0
	}

	/// Values accumulated so far across all steps.
	pub fn values(&self) -> &HashMap<String, serde_json::Value> {
		&self.values
	}

	pub fn value(&self, name: &str) -> Option<&serde_json::Value> {
		self.values.get(name)
	}

	/// Per-field validation errors currently recorded.
	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}

	/// Names of the fields to render for the current step, conditional
	/// groups resolved against the current values.
	pub fn visible_fields(&self) -> Vec<&str> {
		self.steps
			.get(self.current_step)
			.map(|s| s.form.visible_fields(&self.values))
			.unwrap_or_default()
	}

	/// Store a field value.
	///
	/// If the field currently has a recorded error it is re-validated
	/// immediately so a corrected value clears its message; fields
	/// without an error are left alone until the next navigation.
	pub fn set_field(&mut self, name: &str, value: serde_json::Value) {
		self.values.insert(name.to_string(), value);
		if self.errors.contains_key(name) {
			self.revalidate_field(name);
		}
	}

	/// Add or remove one option of a multi-select field, keeping the
	/// selection an ordered set: insertion order preserved, each option
	/// present at most once.
	///
	/// # Examples
	///
	/// ```
	/// use zawajuna_forms::FormWizard;
	/// use serde_json::json;
	///
	/// let mut wizard = FormWizard::new();
	/// wizard.toggle_multi_select("languages", "Arabe", true);
	/// wizard.toggle_multi_select("languages", "Français", true);
	/// wizard.toggle_multi_select("languages", "Arabe", false);
	///
	/// assert_eq!(wizard.value("languages"), Some(&json!(["Français"])));
	/// ```
	pub fn toggle_multi_select(&mut self, name: &str, option: &str, included: bool) {
		let entry = self
			.values
			.entry(name.to_string())
			.or_insert_with(|| serde_json::json!([]));
		if let Some(items) = entry.as_array_mut() {
			if included {
				if !items.iter().any(|v| v.as_str() == Some(option)) {
					items.push(serde_json::json!(option));
				}
			} else {
				items.retain(|v| v.as_str() != Some(option));
			}
		}
		if self.errors.contains_key(name) {
			self.revalidate_field(name);
		}
	}

	/// Advance one step if every visible field on the current step is
	/// valid. Returns whether the step changed: a validation failure
	/// records the errors and stays, and advancing past the last step is
	/// a silent no-op.
	pub fn next_step(&mut self) -> bool {
		if self.steps.is_empty() {
			return false;
		}

		self.errors.remove(ALL_FIELDS_KEY);
		if !self.validate_step(self.current_step) {
			tracing::debug!(
				step = self.step_number(),
				errors = self.errors.len(),
				"advancement blocked by validation errors"
			);
			return false;
		}

		if self.is_last_step() {
			return false;
		}

		self.current_step += 1;
		tracing::debug!(step = self.step_number(), "advanced to next step");
		true
	}

	/// Move back one step. Never re-validates; at the first step this is
	/// a silent no-op.
	pub fn previous_step(&mut self) -> bool {
		if self.is_first_step() {
			return false;
		}
		self.current_step -= 1;
		tracing::debug!(step = self.step_number(), "returned to previous step");
		true
	}

	/// Validate every step and hand the complete payload to `sink`.
	///
	/// On success the sink receives exactly one payload containing every
	/// declared field (hidden conditional fields keep their retained
	/// values; untouched optional fields are null). On failure the
	/// wizard jumps to the first step containing an error and returns
	/// `false` with the errors recorded.
	pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> bool {
		self.errors.clear();

		let mut first_invalid = None;
		for index in 0..self.steps.len() {
			if !self.validate_step(index) && first_invalid.is_none() {
				first_invalid = Some(index);
			}
		}

		if let Some(index) = first_invalid {
			self.current_step = index;
			tracing::debug!(
				step = index + 1,
				errors = self.errors.len(),
				"submission rejected, jumped to first invalid step"
			);
			return false;
		}

		let payload = self.payload();
		tracing::debug!(fields = payload.len(), "wizard submitted");
		sink.deliver(payload);
		true
	}

	/// Drop all entered values and errors and return to the first step,
	/// restoring the seeded defaults.
	pub fn reset(&mut self) {
		self.values = self.initial.clone();
		self.errors.clear();
		self.current_step = 0;
	}

	/// Bind the shared values into one step's form, validate it, and
	/// fold the outcome back: cleaned values into `values`, failures
	/// into `errors`.
	fn validate_step(&mut self, index: usize) -> bool {
		let bound = self.values.clone();
		let step = &mut self.steps[index];
		step.form.bind(bound);
		let ok = step.form.is_valid();

		let field_names: Vec<String> = step.form.field_names().map(str::to_string).collect();
		for name in &field_names {
			self.errors.remove(name);
			if let Some(cleaned) = step.form.cleaned_data().get(name) {
				self.values.insert(name.clone(), cleaned.clone());
			}
		}
		// Merged, not overwritten: several steps may each contribute a
		// form-level message under the shared key.
		for (field, messages) in step.form.errors() {
			self.errors
				.entry(field.clone())
				.or_default()
				.extend(messages.iter().cloned());
		}

		ok
	}

	/// Re-check a single field against the current values and clear or
	/// replace its error. Runs the field's own rule and the owning form's
	/// cross-field rules, so a confirmation field stays marked until the
	/// values actually match.
	fn revalidate_field(&mut self, name: &str) {
		let owner = self
			.steps
			.iter()
			.find(|s| s.form.get_field(name).is_some());

		let Some(step) = owner else {
			self.errors.remove(name);
			return;
		};

		if !step.form.is_field_visible(name, &self.values) {
			self.errors.remove(name);
			return;
		}

		let messages = step.form.check_field(name, &self.values);
		if messages.is_empty() {
			self.errors.remove(name);
		} else {
			self.errors.insert(name.to_string(), messages);
		}
	}

	/// Complete payload: every declared field across every step.
	fn payload(&self) -> HashMap<String, serde_json::Value> {
		let mut payload = HashMap::new();
		for step in &self.steps {
			for name in step.form.field_names() {
				let value = self
					.values
					.get(name)
					.cloned()
					.unwrap_or(serde_json::Value::Null);
				payload.insert(name.to_string(), value);
			}
		}
		payload
	}
}

impl Default for FormWizard {
	fn default() -> Self {
		Self::new()
	}
}
