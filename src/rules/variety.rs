//! Character variety rules - uppercase, digits, special characters.
//!
//! Classes are ASCII-only: non-ASCII letters count as neither uppercase
//! nor special.

/// Characters accepted by [`has_special_char`].
pub const SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>',
];

pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHARS.contains(&c)
}

/// Returns `true` if the password contains at least one `A-Z`.
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Returns `true` if the password contains at least one `0-9`.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Returns `true` if the password contains at least one of [`SPECIAL_CHARS`].
pub fn has_special_char(password: &str) -> bool {
    password.chars().any(is_special_char)
}
