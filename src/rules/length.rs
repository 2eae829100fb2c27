//! Length rule - checks password minimum length.

/// Minimum number of characters (Unicode scalar values).
pub const MIN_LENGTH: usize = 6;

/// Returns `true` if the password has at least [`MIN_LENGTH`] characters.
///
/// No upper bound is enforced here; form fields cap the input.
pub fn min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
