//! Registration submission gate
//!
//! Validates the two registration fields against their minimum lengths and
//! decides whether the form may be submitted. Both checks always run so both
//! fields can report at once.

/// Minimum username length
pub const USERNAME_MIN_LEN: usize = 3;
/// Minimum password length
pub const PASSWORD_MIN_LEN: usize = 8;

pub const USERNAME_TOO_SHORT: &str = "Username too short (min. 3 characters)";
pub const PASSWORD_TOO_SHORT: &str = "Password too short (min. 8 characters)";
/// Neutral indicator shown under a passing field
pub const NO_ERROR: &str = "No error";

/// What to render in a single field's indicator region.
///
/// The region is replaced wholesale on every attempt, so an outcome from
/// attempt N can never leave entries from attempt N-1 behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIndicator {
    /// Field failed validation; message is displayed inline
    Error(&'static str),
    /// Field passed; the "No error" marker is displayed
    Ok,
}

impl FieldIndicator {
    pub fn message(&self) -> &'static str {
        match self {
            FieldIndicator::Error(msg) => msg,
            FieldIndicator::Ok => NO_ERROR,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FieldIndicator::Error(_))
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub username: FieldIndicator,
    pub password: FieldIndicator,
}

impl RegistrationOutcome {
    /// True when the form should be submitted (no failing field)
    pub fn should_submit(&self) -> bool {
        !self.username.is_error() && !self.password.is_error()
    }
}

/// Run both length checks against the field values as read at submit time.
pub fn validate(username: &str, password: &str) -> RegistrationOutcome {
    let username = if username.chars().count() < USERNAME_MIN_LEN {
        FieldIndicator::Error(USERNAME_TOO_SHORT)
    } else {
        FieldIndicator::Ok
    };

    let password = if password.chars().count() < PASSWORD_MIN_LEN {
        FieldIndicator::Error(PASSWORD_TOO_SHORT)
    } else {
        FieldIndicator::Ok
    };

    RegistrationOutcome { username, password }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod username_rule {
        use super::*;

        #[test]
        fn test_two_chars_is_invalid() {
            let outcome = validate("ab", "longenough");
            assert_eq!(outcome.username, FieldIndicator::Error(USERNAME_TOO_SHORT));
        }

        #[test]
        fn test_three_chars_is_valid() {
            let outcome = validate("abc", "longenough");
            assert_eq!(outcome.username, FieldIndicator::Ok);
        }

        #[test]
        fn test_empty_is_invalid() {
            let outcome = validate("", "longenough");
            assert!(outcome.username.is_error());
        }

        #[test]
        fn test_length_counts_chars_not_bytes() {
            // Three multibyte characters satisfy the minimum
            let outcome = validate("héî", "longenough");
            assert_eq!(outcome.username, FieldIndicator::Ok);
        }
    }

    mod password_rule {
        use super::*;

        #[test]
        fn test_seven_chars_is_invalid() {
            let outcome = validate("abc", "seven77");
            assert_eq!(outcome.password, FieldIndicator::Error(PASSWORD_TOO_SHORT));
        }

        #[test]
        fn test_eight_chars_is_valid() {
            let outcome = validate("abc", "password");
            assert_eq!(outcome.password, FieldIndicator::Ok);
        }
    }

    mod submit_decision {
        use super::*;

        #[test]
        fn test_both_invalid_reports_both_and_blocks() {
            let outcome = validate("ab", "short");
            assert_eq!(outcome.username, FieldIndicator::Error(USERNAME_TOO_SHORT));
            assert_eq!(outcome.password, FieldIndicator::Error(PASSWORD_TOO_SHORT));
            assert!(!outcome.should_submit());
        }

        #[test]
        fn test_both_valid_submits() {
            let outcome = validate("abc", "password");
            assert_eq!(outcome.username, FieldIndicator::Ok);
            assert_eq!(outcome.password, FieldIndicator::Ok);
            assert!(outcome.should_submit());
        }

        #[test]
        fn test_one_failing_field_blocks() {
            assert!(!validate("ab", "password").should_submit());
            assert!(!validate("abc", "short").should_submit());
        }

        #[test]
        fn test_passing_field_still_reported_when_other_fails() {
            // Checks are not short-circuited; the passing field gets its
            // neutral indicator even though submission is blocked.
            let outcome = validate("abc", "short");
            assert_eq!(outcome.username, FieldIndicator::Ok);
            assert!(outcome.password.is_error());
        }

        #[test]
        fn test_outcome_depends_only_on_current_inputs() {
            let first = validate("ab", "short");
            let second = validate("abc", "password");
            assert!(!first.should_submit());
            assert!(second.should_submit());
            // Re-running the failing attempt reproduces it exactly
            assert_eq!(validate("ab", "short"), first);
        }
    }

    mod indicator {
        use super::*;

        #[test]
        fn test_ok_message_is_no_error() {
            assert_eq!(FieldIndicator::Ok.message(), "No error");
        }

        #[test]
        fn test_error_message_passthrough() {
            let indicator = FieldIndicator::Error(USERNAME_TOO_SHORT);
            assert_eq!(indicator.message(), USERNAME_TOO_SHORT);
        }
    }
}
