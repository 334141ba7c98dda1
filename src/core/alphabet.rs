use crate::core::constants::{CODE_ALPHABET, ENCODING_BASE};

/// Returns the digit value of an alphabet character, ignoring case.
///
/// The separator, padding and anything outside the alphabet yield `None`.
pub fn digit_value(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    CODE_ALPHABET.chars().position(|a| a == upper)
}

/// Returns the alphabet character for a digit value.
///
/// Values past the end of the alphabet map to its last character.
pub fn digit_char(value: usize) -> char {
    let index = value.min(ENCODING_BASE - 1);
    CODE_ALPHABET.as_bytes()[index] as char
}
