use crate::core::alphabet::digit_value;
use crate::core::constants::{
    ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, MAX_PADDING_LENGTH, PADDING_CHARACTER, SEPARATOR,
    SEPARATOR_POSITION,
};

/// Checks whether a string is a valid full or short code.
///
/// A valid code has exactly one separator at an even position no later than
/// 8, at most one even-length run of padding ending right at a trailing
/// separator, either nothing or at least two characters after the separator,
/// and only alphabet characters otherwise. Case is ignored.
///
/// # Example
/// ```
/// use olc_rs::is_valid;
///
/// assert!(is_valid("8FWC2345+G6"));
/// assert!(is_valid("2345+G6"));
/// assert!(!is_valid("8FWC2345+G"));
/// assert!(!is_valid("8FWC2345G6+"));
/// ```
pub fn is_valid(code: &str) -> bool {
    // Every legal character is ASCII, so byte offsets below are char offsets.
    if code.is_empty() || !code.is_ascii() {
        return false;
    }

    let Some(separator) = code.find(SEPARATOR) else {
        return false;
    };
    if code.rfind(SEPARATOR) != Some(separator) {
        return false;
    }
    if code.len() == 1 {
        return false;
    }
    if separator > SEPARATOR_POSITION || separator % 2 == 1 {
        return false;
    }

    if let Some(padding_start) = code.find(PADDING_CHARACTER) {
        if padding_start == 0 {
            return false;
        }
        let padding_length = code[padding_start..]
            .chars()
            .take_while(|&c| c == PADDING_CHARACTER)
            .count();
        let padding_end = padding_start + padding_length;
        if code[padding_end..].contains(PADDING_CHARACTER) {
            return false;
        }
        if padding_length % 2 == 1 || padding_length > MAX_PADDING_LENGTH {
            return false;
        }
        if !code.ends_with(SEPARATOR) || padding_end != separator {
            return false;
        }
    }

    if code.len() - separator - 1 == 1 {
        return false;
    }

    code.chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .all(|c| digit_value(c).is_some())
}

/// Checks whether a string is a valid short code.
///
/// A short code has fewer than eight digits before the separator and needs a
/// reference location to be recovered.
pub fn is_short(code: &str) -> bool {
    if !is_valid(code) {
        return false;
    }
    code.find(SEPARATOR)
        .is_some_and(|separator| separator < SEPARATOR_POSITION)
}

/// Checks whether a string is a valid full code.
///
/// On top of being valid and not short, the first two digits must decode to a
/// latitude below 90 and a longitude below 180.
///
/// # Example
/// ```
/// use olc_rs::{is_full, is_short};
///
/// assert!(is_full("8FWC2345+G6"));
/// assert!(!is_full("WC2345+G6"));
/// assert!(is_short("WC2345+G6"));
/// assert!(!is_full("X2222222+"));
/// ```
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }

    let mut chars = code.chars();
    if let Some(value) = chars.next().and_then(digit_value) {
        if value * ENCODING_BASE >= (LATITUDE_MAX * 2.0) as usize {
            return false;
        }
    }
    if let Some(value) = chars.next().and_then(digit_value) {
        if value * ENCODING_BASE >= (LONGITUDE_MAX * 2.0) as usize {
            return false;
        }
    }
    true
}
