pub mod alphabet;
pub mod constants;
pub mod precision;

pub use alphabet::{digit_char, digit_value};
pub use constants::{
    CODE_ALPHABET, CODE_PRECISION_EXTRA, CODE_PRECISION_NORMAL, ENCODING_BASE, GRID_COLUMNS,
    GRID_ROWS, GRID_SIZE_DEGREES, LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT,
    MIN_TRIMMABLE_CODE_LENGTH,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION,
};
pub use precision::{clip_latitude, compute_latitude_precision, normalize_longitude};
