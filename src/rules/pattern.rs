//! Pattern rules - detects repeated runs and keyboard/alphabet sequences.

use super::variety::is_special_char;

/// A run of this many identical characters fails [`no_repeated_run`].
pub const MAX_RUN: usize = 3;

/// Length of the sliding window taken from each of [`KNOWN_SEQUENCES`].
pub const SEQUENCE_WINDOW: usize = 3;

/// Reference sequences; any 3-character window of these is forbidden.
pub const KNOWN_SEQUENCES: &[&str] = &[
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
];

fn counts_for_runs(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_special_char(c)
}

/// Returns `true` unless a letter, digit or special character appears
/// [`MAX_RUN`] or more times in a row.
///
/// Runs of whitespace or non-ASCII characters are not checked.
pub fn no_repeated_run(password: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0;

    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }

        if run >= MAX_RUN && counts_for_runs(c) {
            return false;
        }
    }
    true
}

/// Iterates every [`SEQUENCE_WINDOW`]-wide window of every known sequence.
pub fn sequence_windows() -> impl Iterator<Item = &'static str> {
    KNOWN_SEQUENCES.iter().flat_map(|seq| {
        // Sequences are ASCII, byte slicing is safe
        (0..=seq.len() - SEQUENCE_WINDOW).map(move |i| &seq[i..i + SEQUENCE_WINDOW])
    })
}

/// Returns `true` unless the password contains, case-insensitively, any
/// window produced by [`sequence_windows`].
pub fn no_known_sequence(password: &str) -> bool {
    let lower = password.to_lowercase();
    !sequence_windows().any(|window| lower.contains(window))
}
