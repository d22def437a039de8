//! Form validation orchestration. Each route declares its fields once when
//! the component initializes; the builder makes a confirmation field's pairing
//! impossible to omit, so the old implicit element contract becomes explicit
//! configuration. Two passes exist and are not required to agree: the blur
//! pass re-checks a single field, the submit pass evaluates every declared
//! field before the aggregate verdict.

use super::rules::{self, FieldKind, ValidationResult};
use leptos::prelude::*;

/// One declared field: its rule, live value, and the result signal driving
/// the `is-invalid` marker and inline message.
#[derive(Clone, Copy)]
struct FieldBinding {
    id: &'static str,
    kind: FieldKind,
    message_override: Option<&'static str>,
    value: Signal<String>,
    paired: Option<Signal<String>>,
    result: RwSignal<ValidationResult>,
}

#[derive(Clone)]
pub struct FormValidator {
    fields: Vec<FieldBinding>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declares a field validated by `kind`.
    pub fn field(
        mut self,
        id: &'static str,
        kind: FieldKind,
        value: Signal<String>,
        result: RwSignal<ValidationResult>,
    ) -> Self {
        self.fields.push(FieldBinding {
            id,
            kind,
            message_override: None,
            value,
            paired: None,
            result,
        });
        self
    }

    /// Declares a required field with a field-specific message.
    pub fn required(
        mut self,
        id: &'static str,
        message: &'static str,
        value: Signal<String>,
        result: RwSignal<ValidationResult>,
    ) -> Self {
        self.fields.push(FieldBinding {
            id,
            kind: FieldKind::Required,
            message_override: Some(message),
            value,
            paired: None,
            result,
        });
        self
    }

    /// Declares a confirmation field that must match `paired`.
    pub fn confirm(
        mut self,
        id: &'static str,
        value: Signal<String>,
        paired: Signal<String>,
        result: RwSignal<ValidationResult>,
    ) -> Self {
        self.fields.push(FieldBinding {
            id,
            kind: FieldKind::Confirm,
            message_override: None,
            value,
            paired: Some(paired),
            result,
        });
        self
    }

    /// Blur pass: re-validates a single field and applies its feedback.
    /// Routes wire this only to email- and username-kind inputs. An unknown
    /// id is a wiring bug; it is logged and treated as valid.
    pub fn validate_field(&self, id: &str) -> bool {
        let Some(binding) = self.fields.iter().find(|binding| binding.id == id) else {
            leptos::logging::error!("validate_field: no declared field named {id}");
            return true;
        };
        let result = Self::evaluate(binding);
        binding.result.set(result);
        result.valid
    }

    /// Submit pass: evaluates every declared field, applies all feedback, and
    /// only then computes the conjunction. No field is skipped because an
    /// earlier one failed.
    pub fn validate_all(&self) -> bool {
        let results: Vec<ValidationResult> = self.fields.iter().map(Self::evaluate).collect();
        for (binding, result) in self.fields.iter().zip(&results) {
            binding.result.set(*result);
        }
        results.iter().all(|result| result.valid)
    }

    fn evaluate(binding: &FieldBinding) -> ValidationResult {
        let value = binding.value.get_untracked();
        let paired = binding.paired.map(|signal| signal.get_untracked());
        let result = rules::validate(binding.kind, &value, paired.as_deref());

        if !result.valid {
            if let Some(message) = binding.message_override {
                return ValidationResult::invalid(message);
            }
        }
        result
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::rules::{MSG_CONFIRM, MSG_EMAIL, MSG_PASSWORD_REQUIRED};

    fn field(value: &str) -> (RwSignal<String>, RwSignal<ValidationResult>) {
        (
            RwSignal::new(value.to_string()),
            RwSignal::new(ValidationResult::ok()),
        )
    }

    #[test]
    fn submit_pass_applies_feedback_to_every_field() {
        let (email, email_result) = field("not-an-email");
        let (password, password_result) = field("Abcdef12");

        let validator = FormValidator::new()
            .field("email", FieldKind::Email, email.into(), email_result)
            .field("password", FieldKind::Password, password.into(), password_result);

        assert!(!validator.validate_all());
        assert_eq!(
            email_result.get_untracked(),
            ValidationResult::invalid(MSG_EMAIL)
        );
        assert!(password_result.get_untracked().valid);
    }

    #[test]
    fn submit_pass_is_true_only_when_every_field_holds() {
        let (email, email_result) = field("a@b.co");
        let (password, password_result) = field("Abcdef12");

        let validator = FormValidator::new()
            .field("email", FieldKind::Email, email.into(), email_result)
            .field("password", FieldKind::Password, password.into(), password_result);

        assert!(validator.validate_all());
        assert!(email_result.get_untracked().valid);
        assert!(password_result.get_untracked().valid);
    }

    #[test]
    fn confirm_field_tracks_the_paired_value() {
        let (password, password_result) = field("Abcdef12");
        let (confirm, confirm_result) = field("Abcdef13");

        let validator = FormValidator::new()
            .field("password", FieldKind::Password, password.into(), password_result)
            .confirm("password2", confirm.into(), password.into(), confirm_result);

        assert!(!validator.validate_all());
        assert_eq!(
            confirm_result.get_untracked(),
            ValidationResult::invalid(MSG_CONFIRM)
        );

        confirm.set("Abcdef12".to_string());
        assert!(validator.validate_all());
        assert!(confirm_result.get_untracked().valid);
    }

    #[test]
    fn blur_pass_touches_only_the_named_field() {
        let (email, email_result) = field("broken");
        let (username, username_result) = field("ab");

        let validator = FormValidator::new()
            .field("email", FieldKind::Email, email.into(), email_result)
            .field("username", FieldKind::Username, username.into(), username_result);

        assert!(!validator.validate_field("email"));
        assert!(!email_result.get_untracked().valid);
        // The username result is untouched until its own blur or a submit.
        assert!(username_result.get_untracked().valid);
    }

    #[test]
    fn required_override_message_is_surfaced() {
        let (password, password_result) = field("   ");

        let validator = FormValidator::new().required(
            "password",
            MSG_PASSWORD_REQUIRED,
            password.into(),
            password_result,
        );

        assert!(!validator.validate_all());
        assert_eq!(
            password_result.get_untracked(),
            ValidationResult::invalid(MSG_PASSWORD_REQUIRED)
        );
    }

    #[test]
    fn unknown_field_id_is_treated_as_valid() {
        let validator = FormValidator::new();
        assert!(validator.validate_field("ghost"));
    }
}
