pub mod boolean_field;
pub mod char_field;
pub mod choice_field;
pub mod email_field;
pub mod integer_field;
pub mod password_field;

pub use boolean_field::BooleanField;
pub use char_field::CharField;
pub use choice_field::{ChoiceField, MultipleChoiceField};
pub use email_field::EmailField;
pub use integer_field::IntegerField;
pub use password_field::PasswordField;
