//! Per-field validation rules. `validate` never panics and always returns a
//! result; each failure carries a fixed message surfaced inline next to the
//! field.

use regex::Regex;

/// Local-part@domain where the domain is either a bracketed dotted-quad or
/// dot-separated labels ending in an alphabetic suffix of two or more letters.
const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#;

const USERNAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_.]*$";

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_USERNAME_REQUIRED: &str = "Username is required";
pub const MSG_USERNAME_SHORT: &str = "Username must be at least 3 characters";
pub const MSG_USERNAME_CHARSET: &str =
    "Username must start with a letter and can only contain letters, numbers, dots or underscores";
pub const MSG_PASSWORD_RULES: &str =
    "Password must be at least 8 characters and include uppercase, lowercase, and numbers";
pub const MSG_CONFIRM: &str = "Passwords do not match";
pub const MSG_OTP: &str = "Authentication code must be 6 digits";

/// Validation rule a field declares once at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty after trimming.
    Required,
    Email,
    Username,
    /// Registration password: lowercase, uppercase, digit, length >= 8. A
    /// special character only affects the strength score, not validity.
    Password,
    /// Must equal the paired field's current value.
    Confirm,
    /// Exactly six digits after trimming.
    OtpToken,
}

/// Outcome of validating a single field. Recomputed on every blur and submit,
/// never retained as history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl ValidationResult {
    pub const fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub const fn invalid(message: &'static str) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }
}

/// Validates one value against its rule. `paired` carries the partner field's
/// current value for `Confirm` and is ignored otherwise.
pub fn validate(kind: FieldKind, value: &str, paired: Option<&str>) -> ValidationResult {
    match kind {
        FieldKind::Required => {
            if value.trim().is_empty() {
                ValidationResult::invalid(MSG_REQUIRED)
            } else {
                ValidationResult::ok()
            }
        }
        FieldKind::Email => {
            if is_valid_email(value.trim()) {
                ValidationResult::ok()
            } else {
                ValidationResult::invalid(MSG_EMAIL)
            }
        }
        FieldKind::Username => validate_username(value),
        FieldKind::Password => {
            if is_valid_password(value) {
                ValidationResult::ok()
            } else {
                ValidationResult::invalid(MSG_PASSWORD_RULES)
            }
        }
        FieldKind::Confirm => {
            if paired == Some(value) {
                ValidationResult::ok()
            } else {
                ValidationResult::invalid(MSG_CONFIRM)
            }
        }
        FieldKind::OtpToken => {
            if is_valid_token(value.trim()) {
                ValidationResult::ok()
            } else {
                ValidationResult::invalid(MSG_OTP)
            }
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(email))
}

fn validate_username(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::invalid(MSG_USERNAME_REQUIRED);
    }
    if value.chars().count() < 3 {
        return ValidationResult::invalid(MSG_USERNAME_SHORT);
    }
    if !Regex::new(USERNAME_PATTERN).is_ok_and(|re| re.is_match(value)) {
        return ValidationResult::invalid(MSG_USERNAME_CHARSET);
    }
    ValidationResult::ok()
}

fn is_valid_password(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().count() >= 8
}

fn is_valid_token(value: &str) -> bool {
    value.chars().count() == 6 && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_dotted_labels_with_alpha_suffix() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
    }

    #[test]
    fn email_accepts_bracketed_dotted_quad() {
        assert!(is_valid_email("a.b@[192.168.0.1]"));
    }

    #[test]
    fn email_accepts_quoted_local_part() {
        assert!(is_valid_email("\"odd local\"@example.com"));
    }

    #[test]
    fn email_rejects_bare_domain_and_missing_suffix() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_rule_trims_before_matching() {
        let result = validate(FieldKind::Email, "  a@b.co  ", None);
        assert!(result.valid);
    }

    #[test]
    fn username_must_start_with_a_letter() {
        let result = validate(FieldKind::Username, "1abc", None);
        assert_eq!(result, ValidationResult::invalid(MSG_USERNAME_CHARSET));
    }

    #[test]
    fn username_minimum_length_is_three() {
        let result = validate(FieldKind::Username, "ab", None);
        assert_eq!(result, ValidationResult::invalid(MSG_USERNAME_SHORT));
    }

    #[test]
    fn username_allows_letters_digits_dot_underscore() {
        assert!(validate(FieldKind::Username, "a.b_1", None).valid);
        assert!(!validate(FieldKind::Username, "a b c", None).valid);
    }

    #[test]
    fn username_empty_reports_required() {
        let result = validate(FieldKind::Username, "   ", None);
        assert_eq!(result, ValidationResult::invalid(MSG_USERNAME_REQUIRED));
    }

    #[test]
    fn password_needs_three_classes_and_length() {
        assert!(validate(FieldKind::Password, "Abcdef12", None).valid);
        assert!(!validate(FieldKind::Password, "abcdef12", None).valid);
        assert!(!validate(FieldKind::Password, "ABCDEF12", None).valid);
        assert!(!validate(FieldKind::Password, "Abcdefgh", None).valid);
        assert!(!validate(FieldKind::Password, "Abc12", None).valid);
    }

    #[test]
    fn password_does_not_require_special_characters() {
        assert!(validate(FieldKind::Password, "Abcdef12", None).valid);
    }

    #[test]
    fn confirm_matches_paired_value_exactly() {
        assert!(validate(FieldKind::Confirm, "Abcdef12", Some("Abcdef12")).valid);
        assert!(!validate(FieldKind::Confirm, "Abcdef12", Some("Abcdef13")).valid);
        assert!(!validate(FieldKind::Confirm, "Abcdef12", None).valid);
    }

    #[test]
    fn otp_token_is_exactly_six_digits() {
        assert!(validate(FieldKind::OtpToken, "123456", None).valid);
        assert!(validate(FieldKind::OtpToken, " 123456 ", None).valid);
        assert!(!validate(FieldKind::OtpToken, "12345", None).valid);
        assert!(!validate(FieldKind::OtpToken, "1234567", None).valid);
        assert!(!validate(FieldKind::OtpToken, "12345a", None).valid);
    }

    #[test]
    fn required_trims_whitespace() {
        assert!(!validate(FieldKind::Required, "   ", None).valid);
        assert!(validate(FieldKind::Required, " x ", None).valid);
    }
}
