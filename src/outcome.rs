//! Evaluation results returned by the validator.

use crate::rules::Rule;

/// Satisfied/unsatisfied flag for each of the six rules.
///
/// Always computed in full from a single candidate; it carries no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleOutcome {
    flags: [bool; Rule::COUNT],
}

impl RuleOutcome {
    /// Evaluates every rule against `password`.
    pub(crate) fn evaluate(password: &str) -> Self {
        let mut flags = [false; Rule::COUNT];
        for rule in Rule::ALL {
            flags[rule.index()] = rule.is_satisfied(password);
        }
        Self { flags }
    }

    /// Returns whether `rule` is satisfied.
    pub fn get(&self, rule: Rule) -> bool {
        self.flags[rule.index()]
    }

    /// Iterates `(rule, satisfied)` pairs in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::ALL.iter().map(|&rule| (rule, self.get(rule)))
    }

    /// Failing rules, in rule order.
    pub fn failed(&self) -> impl Iterator<Item = Rule> + '_ {
        self.iter().filter(|(_, ok)| !ok).map(|(rule, _)| rule)
    }

    pub fn satisfied_count(&self) -> usize {
        self.flags.iter().filter(|&&ok| ok).count()
    }

    pub fn all_satisfied(&self) -> bool {
        self.flags.iter().all(|&ok| ok)
    }
}

/// Submit-time verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// One message per failed rule, in rule order.
    Invalid(Vec<String>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Violation messages; empty when valid.
    pub fn messages(&self) -> &[String] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(messages) => messages,
        }
    }
}

impl From<RuleOutcome> for ValidationResult {
    fn from(outcome: RuleOutcome) -> Self {
        if outcome.all_satisfied() {
            return ValidationResult::Valid;
        }
        ValidationResult::Invalid(
            outcome
                .failed()
                .map(|rule| rule.message().to_string())
                .collect(),
        )
    }
}
