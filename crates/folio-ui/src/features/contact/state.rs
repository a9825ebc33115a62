//! Contact form state.
//!
//! # Design
//! - Keep inputs as raw strings so editing is lossless.
//! - Validate on submit only; the view decides when to show problems.
//! - Submission is simulated, so a successful submit simply resets the form.

use std::fmt::{self, Display, Formatter};

/// Editable contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Message body.
    Message,
}

impl ContactField {
    /// Every field in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Input `id`/`name` attribute.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Visible label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Placeholder text.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your.email@example.com",
            Self::Message => "Tell me about your project or just say hello!",
        }
    }
}

/// Why a field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldProblem {
    /// Empty or whitespace only.
    Required,
    /// Not shaped like `local@domain.tld`.
    InvalidEmail,
}

/// A rejected field and the reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Field that failed.
    pub field: ContactField,
    /// Reason it failed.
    pub problem: FieldProblem,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.problem {
            FieldProblem::Required => write!(f, "{} is required", self.field.label()),
            FieldProblem::InvalidEmail => f.write_str("Enter a valid email address"),
        }
    }
}

/// Contact form inputs plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Whether a submission is in flight.
    pub submitting: bool,
}

impl ContactForm {
    /// Current raw value of a field.
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replace a field's value.
    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Problems with the current inputs, in form order.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        ContactField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = self.value(field).trim();
                let problem = if value.is_empty() {
                    Some(FieldProblem::Required)
                } else if field == ContactField::Email && !looks_like_email(value) {
                    Some(FieldProblem::InvalidEmail)
                } else {
                    None
                };
                problem.map(|problem| FieldError { field, problem })
            })
            .collect()
    }

    /// Start submitting if the inputs are valid and nothing is in flight.
    ///
    /// # Errors
    ///
    /// Returns the validation problems when any field is rejected. An
    /// in-flight submission is reported as an empty error list.
    pub fn begin_submit(&mut self) -> Result<(), Vec<FieldError>> {
        if self.submitting {
            return Err(Vec::new());
        }
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        self.submitting = true;
        Ok(())
    }

    /// Finish a successful submission and clear every field.
    pub fn complete_submit(&mut self) {
        *self = Self::default();
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.update(ContactField::Name, "Ada Lovelace");
        form.update(ContactField::Email, "ada@example.com");
        form.update(ContactField::Message, "Hello there");
        form
    }

    #[test]
    fn empty_form_requires_every_field() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|err| err.problem == FieldProblem::Required));
        assert_eq!(errors[0].to_string(), "Name is required");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.update(ContactField::Message, "   \n");
        assert_eq!(
            form.validate(),
            vec![FieldError {
                field: ContactField::Message,
                problem: FieldProblem::Required,
            }]
        );
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a da@example.com", "ada@example."] {
            let mut form = filled();
            form.update(ContactField::Email, bad);
            assert_eq!(
                form.validate(),
                vec![FieldError {
                    field: ContactField::Email,
                    problem: FieldProblem::InvalidEmail,
                }],
                "{bad}"
            );
        }
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn submit_cycle_resets_fields() {
        let mut form = filled();
        assert_eq!(form.begin_submit(), Ok(()));
        assert!(form.submitting);
        assert_eq!(form.begin_submit(), Err(Vec::new()));
        form.complete_submit();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn invalid_submit_stays_idle() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit().is_err());
        assert!(!form.submitting);
    }
}
