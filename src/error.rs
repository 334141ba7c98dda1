/// Error type for olc-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum OlcError {
    /// The requested code length is below 2, or odd and below 8.
    InvalidLength(usize),
    /// The code is not a valid full code.
    InvalidCode(String),
    /// The code contains padding and cannot be shortened.
    PaddedCode(String),
    /// The code has too few digits to be shortened.
    CodeTooShort(String),
    /// The code is neither a valid short code nor a valid full code.
    InvalidShortCode(String),
    /// A latitude or longitude is NaN or infinite.
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// A builder was finished without a location.
    MissingCoordinate,
}

impl std::fmt::Display for OlcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OlcError::InvalidLength(len) => write!(f, "Invalid code length: {}", len),
            OlcError::InvalidCode(code) => write!(f, "Invalid full code: {}", code),
            OlcError::PaddedCode(code) => write!(f, "Cannot shorten padded code: {}", code),
            OlcError::CodeTooShort(code) => write!(f, "Code too short to shorten: {}", code),
            OlcError::InvalidShortCode(code) => write!(f, "Invalid short code: {}", code),
            OlcError::InvalidCoordinate {
                latitude,
                longitude,
            } => write!(f, "Invalid coordinate: ({}, {})", latitude, longitude),
            OlcError::MissingCoordinate => write!(f, "No coordinate provided"),
        }
    }
}

impl std::error::Error for OlcError {}
