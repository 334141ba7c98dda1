use crate::area::CodeArea;
use crate::coord::Coordinate;
use crate::core::constants::CODE_PRECISION_NORMAL;
use crate::error::OlcError;
use crate::geom::{polygon_to_geojson, polygon_to_wkt};
use crate::index::{decode, encode, recover_nearest, shorten};
use geo_types::{Point, Polygon, Rect};
use std::fmt;
use std::str::FromStr;

/// A full Open Location Code together with the area it decodes to.
///
/// # Example
///
/// ```
/// use olc_rs::PlusCode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// // Coordinates are (longitude, latitude)
/// let code = PlusCode::from_wgs84(&(8.524989, 47.365562), 10)?;
/// assert_eq!(code.code, "8FVC9G8F+6X");
///
/// // Drop the digits a nearby reference point can supply
/// let short = code.shorten(&(8.6, 47.4))?;
/// assert_eq!(short, "9G8F+6X");
///
/// let polygon = code.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlusCode {
    /// Full code in canonical uppercase form
    pub code: String,
    /// Area the code decodes to
    pub area: CodeArea,
}

impl PlusCode {
    pub fn builder() -> PlusCodeBuilder {
        PlusCodeBuilder::new()
    }

    /// Create a PlusCode from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use olc_rs::PlusCode;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), olc_rs::OlcError> {
    /// // From tuple
    /// let code = PlusCode::from_wgs84(&(2.123002, 41.380872), 10)?;
    /// // From Point
    /// let same = PlusCode::from_wgs84(&Point::new(2.123002, 41.380872), 10)?;
    /// assert_eq!(code, same);
    /// assert_eq!(code.to_string(), "8FH494JF+86");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, code_length: usize) -> Result<Self, OlcError> {
        let code = encode(coord.y(), coord.x(), code_length)?;
        let area = decode(&code)?;
        Ok(Self { code, area })
    }

    /// Create a PlusCode from a full code string, in any case.
    pub fn from_code(code: &str) -> Result<Self, OlcError> {
        let area = decode(code)?;
        Ok(Self {
            code: code.to_ascii_uppercase(),
            area,
        })
    }

    /// Recover the full code a short code means near `reference`.
    pub fn recover(short_code: &str, reference: &impl Coordinate) -> Result<Self, OlcError> {
        let code = recover_nearest(short_code, reference.y(), reference.x())?;
        Self::from_code(&code)
    }

    /// Number of significant digits in the code.
    pub fn code_length(&self) -> usize {
        self.area.code_length()
    }

    /// Returns the center of the area (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        self.area.center()
    }

    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.area.contains(coord)
    }

    /// Shortens the code relative to a nearby reference location.
    pub fn shorten(&self, reference: &impl Coordinate) -> Result<String, OlcError> {
        shorten(&self.code, reference.y(), reference.x())
    }

    pub fn to_rect(&self) -> Rect<f64> {
        self.area.to_rect()
    }

    /// Converts this code to its rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.area.to_polygon()
    }

    /// The polygon as Well-Known Text.
    pub fn to_wkt(&self) -> String {
        polygon_to_wkt(&self.to_polygon())
    }

    /// The polygon as a GeoJSON geometry.
    pub fn to_geojson(&self) -> String {
        polygon_to_geojson(&self.to_polygon())
    }
}

impl fmt::Display for PlusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for PlusCode {
    type Err = OlcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Builder for [`PlusCode`], defaulting to [`CODE_PRECISION_NORMAL`] digits.
///
/// # Example
/// ```
/// use olc_rs::{CODE_PRECISION_EXTRA, PlusCode};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let code = PlusCode::builder()
///     .code_length(CODE_PRECISION_EXTRA)
///     .lat_lng(20.3701125, 2.782234375)
///     .build()?;
/// assert_eq!(code.code, "7FG49QCJ+2VX");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct PlusCodeBuilder {
    code_length: Option<usize>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl PlusCodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code_length(mut self, code_length: usize) -> Self {
        self.code_length = Some(code_length);
        self
    }

    pub fn lat_lng(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn wgs84(mut self, coord: &impl Coordinate) -> Self {
        self.latitude = Some(coord.y());
        self.longitude = Some(coord.x());
        self
    }

    pub fn build(self) -> Result<PlusCode, OlcError> {
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Err(OlcError::MissingCoordinate);
        };
        let code_length = self.code_length.unwrap_or(CODE_PRECISION_NORMAL);

        PlusCode::from_wgs84(&(longitude, latitude), code_length)
    }
}
