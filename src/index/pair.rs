use crate::area::CodeArea;
use crate::core::alphabet::digit_char;
use crate::core::constants::{
    ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, PAIR_RESOLUTIONS, SEPARATOR,
    SEPARATOR_POSITION,
};

/// Encodes the pair section (the first up to 10 digits) of a code.
///
/// Latitude and longitude are shifted to be non-negative, then each pair of
/// digits takes the floor of the remaining latitude and longitude at the
/// pair's place value. The separator goes in after the eighth digit; shorter
/// codes are padded to eight digits and end with the separator.
///
/// `latitude` must already be clipped below 90 and `longitude` normalized.
pub(crate) fn encode_pairs(latitude: f64, longitude: f64, code_length: usize) -> String {
    let mut code = String::with_capacity(code_length + 2);
    let mut adjusted_latitude = latitude + LATITUDE_MAX;
    let mut adjusted_longitude = longitude + LONGITUDE_MAX;

    let mut digit_count = 0;
    while digit_count < code_length {
        let place_value = PAIR_RESOLUTIONS[digit_count / 2];

        let digit = floor_digit(adjusted_latitude, place_value);
        adjusted_latitude -= digit as f64 * place_value;
        code.push(digit_char(digit));

        let digit = floor_digit(adjusted_longitude, place_value);
        adjusted_longitude -= digit as f64 * place_value;
        code.push(digit_char(digit));

        digit_count += 2;
        if digit_count == SEPARATOR_POSITION && digit_count < code_length {
            code.push(SEPARATOR);
        }
    }

    while code.len() < SEPARATOR_POSITION {
        code.push(PADDING_CHARACTER);
    }
    if code.len() == SEPARATOR_POSITION {
        code.push(SEPARATOR);
    }
    code
}

/// Decodes the digit values of a pair section into an area.
///
/// Even positions carry latitude and odd positions longitude. The area spans
/// one step of the last place value used on each axis.
pub(crate) fn decode_pairs(digits: &[usize]) -> CodeArea {
    let (latitude_lo, latitude_hi) = decode_pair_sequence(digits, 0);
    let (longitude_lo, longitude_hi) = decode_pair_sequence(digits, 1);

    CodeArea::new(
        latitude_lo - LATITUDE_MAX,
        longitude_lo - LONGITUDE_MAX,
        latitude_hi - LATITUDE_MAX,
        longitude_hi - LONGITUDE_MAX,
        digits.len(),
    )
}

fn decode_pair_sequence(digits: &[usize], offset: usize) -> (f64, f64) {
    let mut value = 0.0;
    let mut resolution = PAIR_RESOLUTIONS[0];
    for (i, &digit) in digits
        .iter()
        .skip(offset)
        .step_by(2)
        .take(PAIR_RESOLUTIONS.len())
        .enumerate()
    {
        resolution = PAIR_RESOLUTIONS[i];
        value += digit as f64 * resolution;
    }
    (value, value + resolution)
}

// Float drift can leave a remainder a hair below zero or a quotient on the
// next integer; the digit stays inside the alphabet either way.
fn floor_digit(value: f64, place_value: f64) -> usize {
    ((value / place_value).floor() as usize).min(ENCODING_BASE - 1)
}
