//! # olc-rs
//!
//! Open Location Code ("Plus Code") encoding for Rust. A code names a
//! rectangle of the Earth's surface, works offline and can be shortened
//! relative to a nearby reference.
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - The Codec
//!
//! ```
//! use olc_rs::{decode, encode, is_full, recover_nearest, shorten};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let code = encode(47.365562, 8.524989, 10)?;
//! assert_eq!(code, "8FVC9G8F+6X");
//! assert!(is_full(&code));
//!
//! let area = decode(&code)?;
//! assert_eq!(area.code_length(), 10);
//!
//! let short = shorten(&code, 47.4, 8.6)?;
//! assert_eq!(short, "9G8F+6X");
//! assert_eq!(recover_nearest(&short, 47.4, 8.6)?, code);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PlusCode` - A Code and its Area
//!
//! ```
//! use olc_rs::PlusCode;
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let code = PlusCode::from_wgs84(&(2.123002, 41.380872), 10)?;
//! println!("{}", code);
//! let polygon = code.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `EncodeCoordinates` / `DecodeCodes` - Bulk Conversion
//!
//! ```
//! use olc_rs::{DecodeCodes, EncodeCoordinates};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let codes = vec![(2.123002, 41.380872), (8.524989, 47.365562)].to_plus_codes(10)?;
//! let areas = codes.decode_all()?;
//! assert_eq!(areas.len(), 2);
//! # Ok(())
//! # }
//! ```
//!

pub mod area;
pub mod bulk;
pub mod code;
pub mod coord;
pub mod core;
pub mod error;
pub mod geom;
pub mod index;

pub use area::CodeArea;
pub use bulk::{DecodeCodes, EncodeCoordinates};
pub use code::{PlusCode, PlusCodeBuilder};
pub use coord::Coordinate;
pub use self::core::{
    CODE_ALPHABET, CODE_PRECISION_EXTRA, CODE_PRECISION_NORMAL, GRID_COLUMNS, GRID_ROWS,
    GRID_SIZE_DEGREES, MAX_DIGIT_COUNT, MIN_TRIMMABLE_CODE_LENGTH, PADDING_CHARACTER,
    PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION, clip_latitude,
    compute_latitude_precision, normalize_longitude,
};
pub use error::OlcError;
pub use geom::{area_to_polygon, polygon_to_geojson, polygon_to_wkt};
pub use index::{decode, encode, is_full, is_short, is_valid, recover_nearest, shorten};

pub use geo_types;
