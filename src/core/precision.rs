use crate::core::constants::{
    ENCODING_BASE, GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX, PAIR_CODE_LENGTH, PAIR_RESOLUTIONS,
};

/// Clips a latitude into the range [-90, 90].
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Normalizes a longitude into the range [-180, 180).
///
/// Input must be finite.
pub fn normalize_longitude(longitude: f64) -> f64 {
    let mut longitude = longitude % (2.0 * LONGITUDE_MAX);
    while longitude < -LONGITUDE_MAX {
        longitude += 2.0 * LONGITUDE_MAX;
    }
    while longitude >= LONGITUDE_MAX {
        longitude -= 2.0 * LONGITUDE_MAX;
    }
    longitude
}

/// Latitude step subtracted from the north pole before encoding at `code_length`.
///
/// Keeps a code for latitude 90 inside a half-open cell that decodes back.
pub fn compute_latitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        let exponent = (2.0 - code_length as f64 / 2.0).floor() as i32;
        return (ENCODING_BASE as f64).powi(exponent);
    }
    PAIR_RESOLUTIONS[3] / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
}
