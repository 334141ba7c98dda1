use crate::area::CodeArea;
use crate::core::alphabet::digit_value;
use crate::core::constants::{
    CODE_PRECISION_NORMAL, ENCODING_BASE, LATITUDE_MAX, MAX_DIGIT_COUNT,
    MIN_TRIMMABLE_CODE_LENGTH, PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR,
    SEPARATOR_POSITION, SHORTEN_SAFETY_FACTOR,
};
use crate::core::precision::{clip_latitude, compute_latitude_precision, normalize_longitude};
use crate::error::OlcError;
use crate::index::grid::{decode_grid, encode_grid};
use crate::index::pair::{decode_pairs, encode_pairs};
use crate::index::validate::{is_full, is_short};
use tracing::{debug, trace};

/// Encodes a location into a code of `code_length` significant digits.
///
/// Latitude is clipped to [-90, 90] and longitude normalized into
/// [-180, 180). Use [`CODE_PRECISION_NORMAL`] for the usual 10-digit code.
///
/// A length of 9 cannot be written (a lone digit after the separator is
/// invalid) and produces the 10-digit code. Lengths above
/// [`MAX_DIGIT_COUNT`] are clamped to it.
///
/// # Example
/// ```
/// use olc_rs::encode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(encode(41.380872, 2.123002, 10)?, "8FH494JF+86");
/// assert_eq!(encode(90.0, 0.0, 8)?, "CFX2X2X2+");
/// assert_eq!(encode(20.375, 2.775, 6)?, "7FG49Q00+");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidLength`] - `code_length` is below 2, or odd and below 8
/// - [`OlcError::InvalidCoordinate`] - latitude or longitude is not finite
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String, OlcError> {
    if code_length < 2 || (code_length < SEPARATOR_POSITION && code_length % 2 == 1) {
        debug!(code_length, "rejecting code length");
        return Err(OlcError::InvalidLength(code_length));
    }
    check_finite(latitude, longitude)?;
    let code_length = code_length.min(MAX_DIGIT_COUNT);

    let mut latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);
    if latitude == LATITUDE_MAX {
        latitude -= compute_latitude_precision(code_length);
    }

    let mut code = encode_pairs(latitude, longitude, code_length.min(PAIR_CODE_LENGTH));
    if code_length > PAIR_CODE_LENGTH {
        code.push_str(&encode_grid(
            latitude,
            longitude,
            code_length - PAIR_CODE_LENGTH,
        ));
    }
    Ok(code)
}

/// Decodes a full code into the area it covers.
///
/// Digits past [`MAX_DIGIT_COUNT`] are ignored.
///
/// # Example
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("8FVC0000+")?;
/// assert_eq!(area.code_length(), 4);
/// assert_eq!(area.latitude_lo(), 47.0);
/// assert_eq!(area.longitude_hi(), 9.0);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidCode`] - the code is not a valid full code
pub fn decode(code: &str) -> Result<CodeArea, OlcError> {
    if !is_full(code) {
        debug!(code, "rejecting code that is not full");
        return Err(OlcError::InvalidCode(code.to_string()));
    }

    // Separator and padding are not alphabet characters and drop out here.
    let digits: Vec<usize> = code
        .chars()
        .filter_map(digit_value)
        .take(MAX_DIGIT_COUNT)
        .collect();
    let (pair_digits, grid_digits) = digits.split_at(digits.len().min(PAIR_CODE_LENGTH));

    let area = decode_pairs(pair_digits);
    if grid_digits.is_empty() {
        return Ok(area);
    }

    let grid = decode_grid(grid_digits);
    Ok(CodeArea::new(
        area.latitude_lo() + grid.latitude_lo(),
        area.longitude_lo() + grid.longitude_lo(),
        area.latitude_lo() + grid.latitude_hi(),
        area.longitude_lo() + grid.longitude_hi(),
        area.code_length() + grid.code_length(),
    ))
}

/// Removes leading digits from a full code that a nearby reference supplies.
///
/// Eight, six or four leading digits are dropped when the reference lies
/// within 0.3 of the matching pair resolution of the code's center, trying
/// the longest trim first. When the
/// reference is too far away the code comes back unshortened. The result is
/// uppercase.
///
/// # Example
/// ```
/// use olc_rs::shorten;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(shorten("9C3W9QCJ+2VX", 51.3708675, -1.217765625)?, "CJ+2VX");
/// assert_eq!(shorten("9C3W9QCJ+2VX", 51.3, -1.2)?, "9QCJ+2VX");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidCode`] - the code is not a valid full code
/// - [`OlcError::PaddedCode`] - the code contains padding
/// - [`OlcError::CodeTooShort`] - the code has fewer than 6 digits
/// - [`OlcError::InvalidCoordinate`] - the reference is not finite
pub fn shorten(code: &str, latitude: f64, longitude: f64) -> Result<String, OlcError> {
    if !is_full(code) {
        debug!(code, "cannot shorten code that is not full");
        return Err(OlcError::InvalidCode(code.to_string()));
    }
    if code.contains(PADDING_CHARACTER) {
        debug!(code, "cannot shorten padded code");
        return Err(OlcError::PaddedCode(code.to_string()));
    }

    let code = code.to_ascii_uppercase();
    let area = decode(&code)?;
    if area.code_length() < MIN_TRIMMABLE_CODE_LENGTH {
        return Err(OlcError::CodeTooShort(code));
    }
    check_finite(latitude, longitude)?;

    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);
    let range = (area.latitude_center() - latitude)
        .abs()
        .max((area.longitude_center() - longitude).abs());

    for i in (1..PAIR_RESOLUTIONS.len() - 1).rev() {
        let trim = (i + 1) * 2;
        if range < PAIR_RESOLUTIONS[i] * SHORTEN_SAFETY_FACTOR && is_short(&code[trim..]) {
            trace!(code = code.as_str(), range, trim, "shortening code");
            return Ok(code[trim..].to_string());
        }
    }
    Ok(code)
}

/// Recovers the full code nearest to a reference from a short code.
///
/// The digits missing in front of the short code are borrowed from the
/// reference's own code. If the result lies more than half a cell of the
/// missing resolution away from the reference, it is moved one cell towards
/// it, except across a pole. A full code is returned unchanged.
///
/// # Example
/// ```
/// use olc_rs::recover_nearest;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let full = recover_nearest("CJ+2VX", 51.3708675, -1.217765625)?;
/// assert_eq!(full, "9C3W9QCJ+2VX");
///
/// let unchanged = recover_nearest("8FVC9G8F+6X", 0.0, 0.0)?;
/// assert_eq!(unchanged, "8FVC9G8F+6X");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidShortCode`] - the code is neither short nor full
/// - [`OlcError::InvalidCoordinate`] - the reference is not finite
pub fn recover_nearest(
    short_code: &str,
    reference_latitude: f64,
    reference_longitude: f64,
) -> Result<String, OlcError> {
    if !is_short(short_code) {
        if is_full(short_code) {
            return Ok(short_code.to_string());
        }
        debug!(short_code, "cannot recover code that is neither short nor full");
        return Err(OlcError::InvalidShortCode(short_code.to_string()));
    }
    check_finite(reference_latitude, reference_longitude)?;

    let reference_latitude = clip_latitude(reference_latitude);
    let reference_longitude = normalize_longitude(reference_longitude);
    let short_code = short_code.to_ascii_uppercase();
    let Some(separator) = short_code.find(SEPARATOR) else {
        return Err(OlcError::InvalidShortCode(short_code));
    };

    let padding_length = SEPARATOR_POSITION - separator;
    let resolution = (ENCODING_BASE as f64).powi(2 - (padding_length / 2) as i32);
    let half_resolution = resolution / 2.0;

    let reference_code = encode(
        reference_latitude,
        reference_longitude,
        CODE_PRECISION_NORMAL,
    )?;
    let candidate = format!("{}{}", &reference_code[..padding_length], short_code);
    let area = decode(&candidate)?;

    let mut latitude = area.latitude_center();
    let mut longitude = area.longitude_center();

    let difference = latitude - reference_latitude;
    if difference > half_resolution && latitude - resolution >= -LATITUDE_MAX {
        latitude -= resolution;
    } else if difference < -half_resolution && latitude + resolution <= LATITUDE_MAX {
        latitude += resolution;
    }

    let difference = longitude - reference_longitude;
    if difference > half_resolution {
        longitude -= resolution;
    } else if difference < -half_resolution {
        longitude += resolution;
    }

    trace!(
        short_code = short_code.as_str(),
        candidate = candidate.as_str(),
        "recovered code"
    );
    encode(latitude, longitude, area.code_length())
}

fn check_finite(latitude: f64, longitude: f64) -> Result<(), OlcError> {
    if latitude.is_finite() && longitude.is_finite() {
        Ok(())
    } else {
        debug!(latitude, longitude, "rejecting non-finite coordinate");
        Err(OlcError::InvalidCoordinate {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_codes() -> Result<(), OlcError> {
        assert_eq!(encode(41.380872, 2.123002, 10)?, "8FH494JF+86");
        assert_eq!(encode(47.365562, 8.524989, 10)?, "8FVC9G8F+6X");
        assert_eq!(encode(20.3701125, 2.782234375, 11)?, "7FG49QCJ+2VX");
        assert_eq!(encode(0.0, 0.0, 14)?, "6FG22222+22XXXX");
        Ok(())
    }

    #[test]
    fn test_encode_north_pole() -> Result<(), OlcError> {
        assert_eq!(encode(90.0, 0.0, 8)?, "CFX2X2X2+");
        assert_eq!(encode(90.0, 0.0, 11)?, "CFX2X2X2+R25");
        assert_eq!(encode(90.0, 1.0, 4)?, "CFX30000+");
        assert_eq!(encode(92.0, 1.0, 4)?, "CFX30000+");
        Ok(())
    }

    #[test]
    fn test_encode_wraps_longitude() -> Result<(), OlcError> {
        assert_eq!(encode(-37.848760, -216.966358, 10)?, "4RJ5522M+FF");
        assert_eq!(encode(1.0, 180.0, 4)?, "62H20000+");
        assert_eq!(encode(1.0, 181.0, 4)?, "62H30000+");
        assert_eq!(encode(12.5, -720.25, 8)?, "7C4XGQ22+");
        Ok(())
    }

    #[test]
    fn test_encode_invalid_length() {
        assert_eq!(encode(20.0, 2.0, 1), Err(OlcError::InvalidLength(1)));
        assert_eq!(encode(20.0, 2.0, 0), Err(OlcError::InvalidLength(0)));
        assert_eq!(encode(20.0, 2.0, 3), Err(OlcError::InvalidLength(3)));
        assert_eq!(encode(20.0, 2.0, 7), Err(OlcError::InvalidLength(7)));
    }

    #[test]
    fn test_encode_length_nine_writes_ten_digits() -> Result<(), OlcError> {
        assert_eq!(encode(47.365562, 8.524989, 9)?, "8FVC9G8F+6X");
        Ok(())
    }

    #[test]
    fn test_encode_clamps_long_lengths() -> Result<(), OlcError> {
        let longest = encode(10.0, 10.0, MAX_DIGIT_COUNT)?;
        assert_eq!(longest.len(), MAX_DIGIT_COUNT + 1);
        assert_eq!(encode(10.0, 10.0, 40)?, longest);
        assert_eq!(encode(10.0, 10.0, usize::MAX)?, longest);
        assert_eq!(decode(&longest)?.code_length(), MAX_DIGIT_COUNT);
        Ok(())
    }

    #[test]
    fn test_decode_ignores_digits_past_max() -> Result<(), OlcError> {
        let long = decode("7F2G2222+22XXXXXXXXXXXXXXXHH7H7R57752CC6R")?;
        let truncated = decode("7F2G2222+22XXXXX")?;

        assert_eq!(long, truncated);
        assert_eq!(long.code_length(), MAX_DIGIT_COUNT);
        assert!(long.latitude_hi() > long.latitude_lo());
        assert!(long.longitude_hi() > long.longitude_lo());
        Ok(())
    }

    #[test]
    fn test_encode_non_finite() {
        assert!(matches!(
            encode(f64::NAN, 0.0, 10),
            Err(OlcError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            encode(0.0, f64::INFINITY, 10),
            Err(OlcError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_decode() -> Result<(), OlcError> {
        let area = decode("7FG49QCJ+2V")?;
        assert_eq!(area.code_length(), 10);
        assert!((area.latitude_lo() - 20.37).abs() < 1e-9);
        assert!((area.longitude_lo() - 2.782125).abs() < 1e-9);
        assert!((area.latitude_hi() - 20.370125).abs() < 1e-9);
        assert!((area.longitude_hi() - 2.78225).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_decode_with_grid() -> Result<(), OlcError> {
        let area = decode("7FG49QCJ+2VXGJ")?;
        assert_eq!(area.code_length(), 13);
        assert!((area.latitude_lo() - 20.370113).abs() < 1e-9);
        assert!((area.longitude_lo() - 2.782234375).abs() < 1e-9);
        assert!((area.latitude_hi() - 20.370114).abs() < 1e-9);
        assert!((area.longitude_hi() - 2.78223632813).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_decode_lowercase_and_padded() -> Result<(), OlcError> {
        let upper = decode("8FVC9G8F+6X")?;
        let lower = decode("8fvc9g8f+6x")?;
        assert_eq!(upper, lower);

        let padded = decode("62G20000+")?;
        assert_eq!(padded.code_length(), 4);
        assert_eq!(padded.latitude_lo(), 0.0);
        assert_eq!(padded.longitude_lo(), -180.0);
        Ok(())
    }

    #[test]
    fn test_decode_pole_center_capped() -> Result<(), OlcError> {
        let area = decode("CFX30000+")?;
        assert_eq!(area.latitude_hi(), 90.0);
        assert!(area.latitude_center() <= 90.0);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_short_and_invalid() {
        assert_eq!(
            decode("22WM+PW"),
            Err(OlcError::InvalidCode("22WM+PW".to_string()))
        );
        assert!(decode("").is_err());
        assert!(decode("X2222222+").is_err());
        assert!(decode("8FWC2345+G").is_err());
    }

    #[test]
    fn test_roundtrip_contains_point() -> Result<(), OlcError> {
        let points = [
            (47.365562, 8.524989),
            (-41.2730625, 174.7859375),
            (-89.9999, -179.9999),
            (89.9999, 179.9999),
            (0.0, 0.0),
            (35.6895, 139.6917),
        ];
        for (lat, lng) in points {
            for len in [2, 4, 6, 8, 10, 11, 12, 13, 15] {
                let code = encode(lat, lng, len)?;
                let area = decode(&code)?;
                assert_eq!(area.code_length(), len, "{}", code);
                assert!(lat >= area.latitude_lo() - 1e-3 && lat <= area.latitude_hi() + 1e-3);
                assert!(lng >= area.longitude_lo() - 1e-3 && lng <= area.longitude_hi() + 1e-3);
            }
        }
        Ok(())
    }

    // The low corner can floor into the neighbouring cell (22223300+ comes
    // back as 22222300+), so identity is checked from the center.
    #[test]
    fn test_reencode_from_center() -> Result<(), OlcError> {
        for code in ["8FVC9G8F+6X", "7FG49QCJ+2VXGJ", "4RJ5522M+FF", "CFX2X2X2+R25", "62G20000+"] {
            let area = decode(code)?;
            let again = encode(
                area.latitude_center(),
                area.longitude_center(),
                area.code_length(),
            )?;
            assert_eq!(again, code);
        }
        Ok(())
    }

    #[test]
    fn test_shorten() -> Result<(), OlcError> {
        assert_eq!(shorten("9C3W9QCJ+2VX", 51.3701125, -1.217765625)?, "+2VX");
        assert_eq!(shorten("9C3W9QCJ+2VX", 51.3708675, -1.217765625)?, "CJ+2VX");
        assert_eq!(shorten("9C3W9QCJ+2VX", 51.3, -1.2)?, "9QCJ+2VX");
        assert_eq!(shorten("9C3W9QCJ+2VX", 10.0, 100.0)?, "9C3W9QCJ+2VX");
        assert_eq!(shorten("8fvc9g8f+6x", 47.4, 8.6)?, "9G8F+6X");
        Ok(())
    }

    #[test]
    fn test_shorten_keeps_digits_before_bare_separator() -> Result<(), OlcError> {
        assert_eq!(shorten("8FVC9G8F+", 47.3655, 8.525)?, "8F+");
        Ok(())
    }

    #[test]
    fn test_shorten_errors() {
        assert_eq!(
            shorten("22WM+PW", 0.0, 0.0),
            Err(OlcError::InvalidCode("22WM+PW".to_string()))
        );
        assert_eq!(
            shorten("8FVC0000+", 47.5, 8.5),
            Err(OlcError::PaddedCode("8FVC0000+".to_string()))
        );
        assert!(matches!(
            shorten("8FVC9G8F+6X", f64::NAN, 8.5),
            Err(OlcError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_recover_nearest() -> Result<(), OlcError> {
        assert_eq!(
            recover_nearest("+2VX", 51.3701125, -1.217765625)?,
            "9C3W9QCJ+2VX"
        );
        assert_eq!(recover_nearest("9G8F+6X", 47.4, 8.6)?, "8FVC9G8F+6X");
        assert_eq!(recover_nearest("9g8f+6x", 47.4, 8.6)?, "8FVC9G8F+6X");
        assert_eq!(recover_nearest("8F+6X", 47.4, 8.6)?, "8FVCCJ8F+6X");
        Ok(())
    }

    #[test]
    fn test_recover_nearest_errors() {
        assert_eq!(
            recover_nearest("8FWC2345+G", 0.0, 0.0),
            Err(OlcError::InvalidShortCode("8FWC2345+G".to_string()))
        );
        assert!(recover_nearest("", 0.0, 0.0).is_err());
        assert!(recover_nearest("X2222222+", 0.0, 0.0).is_err());
    }

    #[test]
    fn test_shorten_recover_inverse() -> Result<(), OlcError> {
        let cases = [
            (51.3701125, -1.217765625, 11),
            (47.365562, 8.524989, 10),
            (-37.848760, 143.033642, 10),
            (0.00005, 179.99995, 10),
            (-33.8568, 151.2153, 12),
        ];
        for (lat, lng, len) in cases {
            let code = encode(lat, lng, len)?;
            for (dlat, dlng) in [(0.0, 0.0), (0.0004, -0.0004), (0.01, 0.01), (0.2, -0.2)] {
                let (ref_lat, ref_lng) = (lat + dlat, lng + dlng);
                let short = shorten(&code, ref_lat, ref_lng)?;
                assert_eq!(recover_nearest(&short, ref_lat, ref_lng)?, code, "{}", short);
            }
        }
        Ok(())
    }
}
