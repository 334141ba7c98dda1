use crate::area::CodeArea;
use crate::core::alphabet::digit_char;
use crate::core::constants::{
    GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES, LATITUDE_MAX, LONGITUDE_MAX,
};

/// Encodes `code_length` grid digits refining the last pair cell.
///
/// Each digit splits the current cell into 5 rows by 4 columns and names the
/// sub-cell holding the point as `row * 4 + col`.
pub(crate) fn encode_grid(latitude: f64, longitude: f64, code_length: usize) -> String {
    let mut code = String::with_capacity(code_length);
    let mut lat_place_value = GRID_SIZE_DEGREES;
    let mut lng_place_value = GRID_SIZE_DEGREES;
    let mut adjusted_latitude = (latitude + LATITUDE_MAX) % lat_place_value;
    let mut adjusted_longitude = (longitude + LONGITUDE_MAX) % lng_place_value;

    for _ in 0..code_length {
        let row = floor_index(
            adjusted_latitude / (lat_place_value / GRID_ROWS as f64),
            GRID_ROWS,
        );
        let col = floor_index(
            adjusted_longitude / (lng_place_value / GRID_COLUMNS as f64),
            GRID_COLUMNS,
        );
        lat_place_value /= GRID_ROWS as f64;
        lng_place_value /= GRID_COLUMNS as f64;
        adjusted_latitude -= row as f64 * lat_place_value;
        adjusted_longitude -= col as f64 * lng_place_value;
        code.push(digit_char(row * GRID_COLUMNS + col));
    }
    code
}

/// Decodes grid digit values into an area offset from zero.
///
/// The caller adds the bounds to the low corner of the pair area.
pub(crate) fn decode_grid(digits: &[usize]) -> CodeArea {
    let mut latitude_lo = 0.0;
    let mut longitude_lo = 0.0;
    let mut lat_place_value = GRID_SIZE_DEGREES;
    let mut lng_place_value = GRID_SIZE_DEGREES;

    for &digit in digits {
        let row = digit / GRID_COLUMNS;
        let col = digit % GRID_COLUMNS;
        lat_place_value /= GRID_ROWS as f64;
        lng_place_value /= GRID_COLUMNS as f64;
        latitude_lo += row as f64 * lat_place_value;
        longitude_lo += col as f64 * lng_place_value;
    }

    CodeArea::new(
        latitude_lo,
        longitude_lo,
        latitude_lo + lat_place_value,
        longitude_lo + lng_place_value,
        digits.len(),
    )
}

fn floor_index(quotient: f64, size: usize) -> usize {
    (quotient.floor() as usize).min(size - 1)
}
