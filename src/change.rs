//! Change-password request checks.
//!
//! These are the submit-handler rules that sit in front of the policy:
//! required fields, confirmation match and password reuse. They run before
//! the structural rules and are kept out of the validator itself.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::rules::Rule;
use crate::validator::first_violation;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangePasswordError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Passwords do not match")]
    Mismatch,
    #[error("Old and new password cannot be same")]
    ReusedPassword,
    #[error("{0}")]
    Policy(Rule),
}

/// The three fields of a change-password form.
#[derive(Debug)]
pub struct ChangePasswordRequest {
    pub old_password: SecretString,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

impl ChangePasswordRequest {
    pub fn new(old_password: SecretString, new_password: SecretString, confirm_password: SecretString) -> Self {
        Self {
            old_password,
            new_password,
            confirm_password,
        }
    }
}

/// Checks a change-password request before it is sent to the server.
///
/// # Errors
///
/// Checked in this order, the first failure wins:
/// - any field is empty
/// - new and confirmation differ
/// - new equals the old password
/// - the new password breaks a policy rule (first failing rule)
pub fn check_change_request(request: &ChangePasswordRequest) -> Result<(), ChangePasswordError> {
    let old = request.old_password.expose_secret();
    let new = request.new_password.expose_secret();
    let confirm = request.confirm_password.expose_secret();

    if old.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err(ChangePasswordError::MissingFields);
    }
    if new != confirm {
        return Err(ChangePasswordError::Mismatch);
    }
    if new == old {
        return Err(ChangePasswordError::ReusedPassword);
    }
    if let Some(rule) = first_violation(&request.new_password) {
        #[cfg(feature = "tracing")]
        tracing::debug!(rule = rule.name(), "change password rejected by policy");
        return Err(ChangePasswordError::Policy(rule));
    }
    Ok(())
}
