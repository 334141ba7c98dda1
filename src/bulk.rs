use crate::area::CodeArea;
use crate::coord::Coordinate;
use crate::error::OlcError;
use crate::index::{decode, encode};
use rayon::prelude::*;

/// Encodes many coordinates at once, in parallel.
///
/// # Example
/// ```
/// use olc_rs::EncodeCoordinates;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let points = vec![(2.123002, 41.380872), (8.524989, 47.365562)];
/// let codes = points.to_plus_codes(10)?;
/// assert_eq!(codes, vec!["8FH494JF+86", "8FVC9G8F+6X"]);
/// # Ok(())
/// # }
/// ```
pub trait EncodeCoordinates {
    /// Encodes every coordinate, failing on the first error.
    fn to_plus_codes(&self, code_length: usize) -> Result<Vec<String>, OlcError>;
}

impl<C: Coordinate + Sync> EncodeCoordinates for [C] {
    fn to_plus_codes(&self, code_length: usize) -> Result<Vec<String>, OlcError> {
        self.par_iter()
            .map(|c| encode(c.y(), c.x(), code_length))
            .collect()
    }
}

/// Decodes many full codes at once, in parallel.
pub trait DecodeCodes {
    /// Decodes every code, failing on the first invalid one.
    fn decode_all(&self) -> Result<Vec<CodeArea>, OlcError>;
}

impl<S: AsRef<str> + Sync> DecodeCodes for [S] {
    fn decode_all(&self) -> Result<Vec<CodeArea>, OlcError> {
        self.par_iter().map(|s| decode(s.as_ref())).collect()
    }
}
