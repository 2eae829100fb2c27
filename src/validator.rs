//! Password policy validator - live and submit-time evaluation.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::outcome::{RuleOutcome, ValidationResult};
use crate::rules::Rule;

/// Delay before a keystroke is evaluated by [`evaluate_live_tx`].
#[cfg(feature = "async")]
pub const LIVE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates every rule for live (per-keystroke) feedback.
///
/// Pure and synchronous; safe to call on the UI thread on every change.
pub fn evaluate_live(password: &SecretString) -> RuleOutcome {
    let outcome = RuleOutcome::evaluate(password.expose_secret());

    #[cfg(feature = "tracing")]
    tracing::trace!(
        satisfied = outcome.satisfied_count(),
        "live password evaluation"
    );

    outcome
}

/// Validates a password at submit time.
///
/// Returns [`ValidationResult::Valid`] only if all six rules hold, otherwise
/// one message per failed rule in rule order. Never fails, for any input.
///
/// Comparing against the old password is the caller's job, see
/// [`crate::check_change_request`].
pub fn validate(password: &SecretString) -> ValidationResult {
    let outcome = RuleOutcome::evaluate(password.expose_secret());

    #[cfg(feature = "tracing")]
    if !outcome.all_satisfied() {
        let failed: Vec<&str> = outcome.failed().map(Rule::name).collect();
        tracing::debug!(?failed, "password rejected by policy");
    }

    ValidationResult::from(outcome)
}

/// Returns the first failing rule, in rule order, or `None` if valid.
///
/// Stops at the first failure instead of evaluating the whole policy.
pub fn first_violation(password: &SecretString) -> Option<Rule> {
    let pwd = password.expose_secret();
    Rule::ALL.into_iter().find(|rule| !rule.is_satisfied(pwd))
}

/// Debounced live evaluation that sends the outcome via channel.
///
/// Waits [`LIVE_DEBOUNCE`] first; if `token` is cancelled in the meantime
/// (a newer keystroke superseded this one) nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_live_tx(
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<RuleOutcome>,
) {
    tokio::time::sleep(LIVE_DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::trace!("live evaluation superseded");
        return;
    }

    let outcome = evaluate_live(&password);

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send live password evaluation: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_validate_strong_password() {
        let result = validate(&secret("Pm7!xQ2#"));
        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn test_validate_short_password_reports_length() {
        let result = validate(&secret("P7!x"));
        assert!(!result.is_valid());
        assert_eq!(result.messages()[0], Rule::MinLength.message());
    }

    #[test]
    fn test_validate_empty_password() {
        let result = validate(&secret(""));
        assert_eq!(
            result.messages(),
            &[
                Rule::MinLength.message().to_string(),
                Rule::HasUppercase.message().to_string(),
                Rule::HasDigit.message().to_string(),
                Rule::HasSpecialChar.message().to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_whitespace_only() {
        let result = validate(&secret("   "));
        assert!(result.messages().contains(&Rule::MinLength.message().to_string()));
    }

    #[test]
    fn test_validate_repeated_run() {
        let result = validate(&secret("Aaa111!!"));
        assert_eq!(
            result,
            ValidationResult::Invalid(vec![Rule::NoRepeatedRun.message().to_string()])
        );
    }

    #[test]
    fn test_validate_known_sequence() {
        let result = validate(&secret("Qwerty1!"));
        assert_eq!(
            result,
            ValidationResult::Invalid(vec![Rule::NoKnownSequence.message().to_string()])
        );
    }

    #[test]
    fn test_validate_alphabet_prefix_is_a_sequence() {
        // "abc" is the first window of the alphabet
        let result = validate(&secret("Abcdef1!"));
        assert_eq!(
            result,
            ValidationResult::Invalid(vec![Rule::NoKnownSequence.message().to_string()])
        );
    }

    #[test]
    fn test_validate_missing_digit_regardless_of_others() {
        for pwd in ["Pm!xQ#", "x", "AAAA", "Zm!kW?rT"] {
            let result = validate(&secret(pwd));
            assert!(
                result.messages().contains(&Rule::HasDigit.message().to_string()),
                "missing digit not reported for {pwd:?}"
            );
        }
    }

    #[test]
    fn test_validate_message_order() {
        // Fails every rule except length and uppercase
        let result = validate(&secret("QWERTYYY"));
        assert_eq!(
            result.messages(),
            &[
                Rule::HasDigit.message().to_string(),
                Rule::HasSpecialChar.message().to_string(),
                Rule::NoRepeatedRun.message().to_string(),
                Rule::NoKnownSequence.message().to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_non_ascii() {
        let result = validate(&secret("ÄÖÜßéèà"));
        assert!(!result.is_valid());
        assert!(result.messages().contains(&Rule::HasUppercase.message().to_string()));
        assert!(!result.messages().contains(&Rule::MinLength.message().to_string()));
    }

    #[test]
    fn test_validate_very_long_password() {
        let long = "Pm7!xQ2#".repeat(10_000);
        assert!(validate(&secret(&long)).is_valid());
    }

    #[test]
    fn test_evaluate_live_matches_validate() {
        for pwd in ["", "a", "Aaa111!!", "Qwerty1!", "Pm7!xQ2#"] {
            let outcome = evaluate_live(&secret(pwd));
            assert_eq!(ValidationResult::from(outcome), validate(&secret(pwd)));
        }
    }

    #[test]
    fn test_first_violation() {
        assert_eq!(first_violation(&secret("Pm7!xQ2#")), None);
        assert_eq!(first_violation(&secret("")), Some(Rule::MinLength));
        assert_eq!(first_violation(&secret("pm7!xq2#")), Some(Rule::HasUppercase));
        assert_eq!(first_violation(&secret("Aaa111!!")), Some(Rule::NoRepeatedRun));
    }
}
