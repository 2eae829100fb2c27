//! Password policy validation library
//!
//! This library checks a password against a fixed rule set and explains
//! which rules fail, both for live (per-keystroke) feedback and for
//! submit-time validation.
//!
//! # Rules
//!
//! In evaluation order:
//!
//! 1. `minLength`: at least 6 characters
//! 2. `hasUppercase`: at least one `A-Z`
//! 3. `hasDigit`: at least one `0-9`
//! 4. `hasSpecialChar`: at least one of `!@#$%^&*(),.?":{}|<>`
//! 5. `noRepeatedRun`: no character repeated 3 times in a row
//! 6. `noKnownSequence`: no 3-character window of `0123456789`, the
//!    alphabet, `qwertyuiop`, `asdfghjkl` or `zxcvbnm` (case-insensitive)
//!
//! # Features
//!
//! - `async` (default): Enables debounced live evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate_live, validate, Rule, ValidationResult};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Pm7!xQ2#".to_string().into());
//!
//! let outcome = evaluate_live(&password);
//! assert!(outcome.get(Rule::NoKnownSequence));
//!
//! assert_eq!(validate(&password), ValidationResult::Valid);
//! ```

// Internal modules
mod change;
mod outcome;
mod rules;
mod validator;

// Public API
pub use change::{check_change_request, ChangePasswordError, ChangePasswordRequest};
pub use outcome::{RuleOutcome, ValidationResult};
pub use rules::{Rule, KNOWN_SEQUENCES, MAX_RUN, MIN_LENGTH, SEQUENCE_WINDOW, SPECIAL_CHARS};
pub use validator::{evaluate_live, first_violation, validate};

#[cfg(feature = "async")]
pub use validator::{evaluate_live_tx, LIVE_DEBOUNCE};
