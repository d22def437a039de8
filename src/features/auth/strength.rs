//! Password strength scoring for the registration meter. The tier depends
//! only on how many criteria are satisfied, never on which ones, so two
//! different passwords with the same count always land on the same tier.
//! Evaluation is a fixed set of single-pass character checks.

/// Discrete strength classification driving the meter fill and label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    None,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Tier from the number of satisfied criteria. `None` only for an empty
    /// password.
    pub fn from_satisfied(count: usize, empty: bool) -> Self {
        if empty {
            Self::None
        } else if count < 2 {
            Self::Weak
        } else if count < 4 {
            Self::Medium
        } else if count < 5 {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }

    /// CSS class applied to the meter fill; empty string leaves the bar empty.
    pub const fn meter_class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "strength-weak",
            Self::Medium => "strength-medium",
            Self::Strong => "strength-strong",
            Self::VeryStrong => "strength-very-strong",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "Weak password",
            Self::Medium => "Medium strength password",
            Self::Strong => "Strong password",
            Self::VeryStrong => "Very strong password",
        }
    }
}

/// Tier plus the unmet criteria, in fixed order:
/// lowercase, uppercase, digit, special, length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrengthReport {
    pub tier: StrengthTier,
    pub missing: Vec<&'static str>,
}

impl StrengthReport {
    /// Feedback line under the meter; empty for an empty password, label only
    /// once every criterion holds.
    pub fn meter_text(&self) -> String {
        if self.tier == StrengthTier::None {
            return String::new();
        }
        let mut text = self.tier.label().to_string();
        if self.tier != StrengthTier::VeryStrong && !self.missing.is_empty() {
            text.push_str(": Add ");
            text.push_str(&self.missing.join(", "));
        }
        text
    }
}

/// Scores a password against the five criteria. Runs on every keystroke.
pub fn evaluate(password: &str) -> StrengthReport {
    let checks: [(bool, &'static str); 5] = [
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "uppercase letter",
        ),
        (password.chars().any(|c| c.is_ascii_digit()), "number"),
        (
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
            "special character",
        ),
        (
            password.chars().count() >= 8,
            "minimum length of 8 characters",
        ),
    ];

    let missing: Vec<&'static str> = checks
        .iter()
        .filter(|(satisfied, _)| !satisfied)
        .map(|(_, label)| *label)
        .collect();
    let satisfied = checks.len() - missing.len();

    StrengthReport {
        tier: StrengthTier::from_satisfied(satisfied, password.is_empty()),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_tier_none_with_no_text() {
        let report = evaluate("");
        assert_eq!(report.tier, StrengthTier::None);
        assert_eq!(report.meter_text(), "");
        assert_eq!(report.tier.meter_class(), "");
    }

    #[test]
    fn single_criterion_is_weak_with_ordered_feedback() {
        let report = evaluate("abc");
        assert_eq!(report.tier, StrengthTier::Weak);
        assert_eq!(
            report.missing,
            vec![
                "uppercase letter",
                "number",
                "special character",
                "minimum length of 8 characters",
            ]
        );
        assert_eq!(
            report.meter_text(),
            "Weak password: Add uppercase letter, number, special character, \
             minimum length of 8 characters"
        );
    }

    #[test]
    fn all_criteria_is_very_strong_with_nothing_missing() {
        let report = evaluate("Abcdef1!");
        assert_eq!(report.tier, StrengthTier::VeryStrong);
        assert!(report.missing.is_empty());
        assert_eq!(report.meter_text(), "Very strong password");
    }

    #[test]
    fn tier_depends_on_count_not_identity() {
        // Three satisfied criteria each, different combinations.
        let lower_upper_digit = evaluate("aB1");
        let lower_digit_special = evaluate("a1!");
        assert_eq!(lower_upper_digit.tier, StrengthTier::Medium);
        assert_eq!(lower_upper_digit.tier, lower_digit_special.tier);
    }

    #[test]
    fn tier_is_monotonic_in_satisfied_count() {
        let samples = ["a", "aB", "aB1", "aB1!", "aB1!aB1!"];
        let mut last = evaluate(samples[0]).tier;
        for sample in &samples[1..] {
            let tier = evaluate(sample).tier;
            assert!(tier >= last, "tier regressed at {sample:?}");
            last = tier;
        }
    }

    #[test]
    fn strong_feedback_lists_only_the_missing_criterion() {
        let report = evaluate("Abcdef12");
        assert_eq!(report.tier, StrengthTier::Strong);
        assert_eq!(report.missing, vec!["special character"]);
        assert_eq!(report.meter_text(), "Strong password: Add special character");
    }
}
