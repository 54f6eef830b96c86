//! Form processing and multi-step wizard control for Zawajuna
//!
//! This crate provides the state machine behind the product's forms:
//! - Typed form fields with per-field validation and French messages
//! - Forms with conditional field groups and cross-field validation
//! - A multi-step wizard gating forward navigation on step validity
//! - The concrete registration, profile-editing and login flows
//!
//! All state transitions are synchronous and in-memory; persistence and
//! network transmission happen behind the [`SubmissionSink`] boundary.

pub mod bound_field;
pub mod choices;
pub mod field;
pub mod fields;
pub mod flows;
pub mod form;
pub mod wizard;

pub use bound_field::BoundField;
pub use field::{FieldError, FieldResult, FormField, Widget};
pub use fields::{
	BooleanField, CharField, ChoiceField, EmailField, IntegerField, MultipleChoiceField,
	PasswordField,
};
pub use form::{ALL_FIELDS_KEY, Form, FormError, FormResult};
pub use wizard::{FormWizard, SubmissionSink, WizardStep};
