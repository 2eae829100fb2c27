//! Password policy rules
//!
//! Each module holds the predicates for one aspect of the policy. [`Rule`]
//! ties them together in the order used for reporting.

mod length;
mod pattern;
mod variety;

use std::fmt;

pub use length::{min_length, MIN_LENGTH};
pub use pattern::{no_known_sequence, no_repeated_run, KNOWN_SEQUENCES, MAX_RUN, SEQUENCE_WINDOW};
pub use variety::{has_digit, has_special_char, has_uppercase, SPECIAL_CHARS};

/// Predicate signature shared by every rule.
pub type RuleCheck = fn(&str) -> bool;

/// One structural requirement of the password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    MinLength,
    HasUppercase,
    HasDigit,
    HasSpecialChar,
    NoRepeatedRun,
    NoKnownSequence,
}

impl Rule {
    pub const COUNT: usize = 6;

    /// All rules, in evaluation and reporting order.
    pub const ALL: [Rule; Rule::COUNT] = [
        Rule::MinLength,
        Rule::HasUppercase,
        Rule::HasDigit,
        Rule::HasSpecialChar,
        Rule::NoRepeatedRun,
        Rule::NoKnownSequence,
    ];

    /// Stable rule name, as used by form state on the client side.
    pub const fn name(self) -> &'static str {
        match self {
            Rule::MinLength => "minLength",
            Rule::HasUppercase => "hasUppercase",
            Rule::HasDigit => "hasDigit",
            Rule::HasSpecialChar => "hasSpecialChar",
            Rule::NoRepeatedRun => "noRepeatedRun",
            Rule::NoKnownSequence => "noKnownSequence",
        }
    }

    /// Short message shown in the live checklist under the input field.
    pub const fn message(self) -> &'static str {
        match self {
            Rule::MinLength => "Password must be at least 6 characters long",
            Rule::HasUppercase => "Must include at least one uppercase letter",
            Rule::HasDigit => "Must include at least one number",
            Rule::HasSpecialChar => "Must include at least one special character",
            Rule::NoRepeatedRun => "Must not contain repeated characters (e.g., aaa)",
            Rule::NoKnownSequence => "Must not contain common sequences (e.g., abc, 123)",
        }
    }

    /// Full sentence reported when a submit is rejected.
    pub const fn summary(self) -> &'static str {
        match self {
            Rule::MinLength => "Password must be at least 6 characters long.",
            Rule::HasUppercase => "Password must contain at least one uppercase letter.",
            Rule::HasDigit => "Password must contain at least one number.",
            Rule::HasSpecialChar => "Password must contain at least one special character.",
            Rule::NoRepeatedRun => "Password must not contain repeated characters.",
            Rule::NoKnownSequence => {
                "Password must not contain common sequences (e.g., abc, 123, qwe)."
            }
        }
    }

    fn check(self) -> RuleCheck {
        match self {
            Rule::MinLength => min_length,
            Rule::HasUppercase => has_uppercase,
            Rule::HasDigit => has_digit,
            Rule::HasSpecialChar => has_special_char,
            Rule::NoRepeatedRun => no_repeated_run,
            Rule::NoKnownSequence => no_known_sequence,
        }
    }

    /// Evaluates this rule against a plain password.
    pub fn is_satisfied(self, password: &str) -> bool {
        (self.check())(password)
    }

    /// Position of this rule in [`Rule::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.summary())
    }
}
