/// The 20 characters used to encode digits, in digit order.
///
/// Vowels and easily confused characters are left out to avoid spelling words.
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Number base of the pair section (size of the alphabet)
pub const ENCODING_BASE: usize = 20;

/// Separates the first eight digits from the rest of the code
pub const SEPARATOR: char = '+';

/// Position of the separator in an unpadded full code
pub const SEPARATOR_POSITION: usize = 8;

/// Fills unused digit positions in front of the separator
pub const PADDING_CHARACTER: char = '0';

/// Longest allowed run of padding characters
pub(crate) const MAX_PADDING_LENGTH: usize = SEPARATOR_POSITION - 2;

/// Maximum latitude in degrees
pub const LATITUDE_MAX: f64 = 90.0;

/// Maximum longitude in degrees
pub const LONGITUDE_MAX: f64 = 180.0;

/// Number of digits encoded as latitude/longitude pairs
pub const PAIR_CODE_LENGTH: usize = 10;

/// Place value in degrees of each digit pair
pub const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

/// Columns (longitude) of the refinement grid
pub const GRID_COLUMNS: usize = 4;

/// Rows (latitude) of the refinement grid
pub const GRID_ROWS: usize = 5;

/// Edge in degrees of the cell the grid section subdivides
pub const GRID_SIZE_DEGREES: f64 = 0.000125;

/// Most significant digits a code carries; longer requests are clamped and
/// extra decoded digits ignored
pub const MAX_DIGIT_COUNT: usize = 15;

/// Shortest code that may be shortened
pub const MIN_TRIMMABLE_CODE_LENGTH: usize = 6;

/// Default code length, a cell of roughly 14x14 meters
pub const CODE_PRECISION_NORMAL: usize = 10;

/// One grid digit past the pairs, a cell of roughly 3x3 meters
pub const CODE_PRECISION_EXTRA: usize = 11;

/// Fraction of a pair resolution the reference must lie within to drop that pair.
///
/// Kept below one half so recovery tolerates a reference that differs from the
/// one used to shorten.
pub(crate) const SHORTEN_SAFETY_FACTOR: f64 = 0.3;
