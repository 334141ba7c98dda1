use crate::coord::Coordinate;
use crate::core::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use geo_types::{Point, Polygon, Rect, coord};
use serde::Serialize;

/// The rectangle of the Earth's surface a code stands for.
///
/// Bounds are in degrees. The low edges belong to the area, the high edges
/// belong to the neighbouring cells. Centers are derived at construction and
/// capped at the latitude/longitude maxima, since the midpoint of the
/// northernmost cell can round past 90.
///
/// # Example
///
/// ```
/// use olc_rs::{CodeArea, decode};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area: CodeArea = decode("7FG49Q00+")?;
/// assert_eq!(area.code_length(), 6);
/// assert!(area.contains(&(2.775, 20.375)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeArea {
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    latitude_center: f64,
    longitude_center: f64,
    code_length: usize,
}

impl CodeArea {
    pub fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        code_length: usize,
    ) -> Self {
        let latitude_center =
            (latitude_lo + (latitude_hi - latitude_lo) / 2.0).min(LATITUDE_MAX);
        let longitude_center =
            (longitude_lo + (longitude_hi - longitude_lo) / 2.0).min(LONGITUDE_MAX);

        Self {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            latitude_center,
            longitude_center,
            code_length,
        }
    }

    pub fn latitude_lo(&self) -> f64 {
        self.latitude_lo
    }

    pub fn longitude_lo(&self) -> f64 {
        self.longitude_lo
    }

    pub fn latitude_hi(&self) -> f64 {
        self.latitude_hi
    }

    pub fn longitude_hi(&self) -> f64 {
        self.longitude_hi
    }

    pub fn latitude_center(&self) -> f64 {
        self.latitude_center
    }

    pub fn longitude_center(&self) -> f64 {
        self.longitude_center
    }

    /// Number of significant digits, excluding separator and padding.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Returns the center as a point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude_center, self.latitude_center)
    }

    /// Returns true if the coordinate falls inside the area.
    ///
    /// Low edges are inclusive and high edges exclusive, matching the cells
    /// `encode` assigns points to.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        let (lng, lat) = (coord.x(), coord.y());
        lat >= self.latitude_lo
            && lat < self.latitude_hi
            && lng >= self.longitude_lo
            && lng < self.longitude_hi
    }

    /// Converts the area to a `geo_types::Rect`.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.longitude_lo, y: self.latitude_lo },
            coord! { x: self.longitude_hi, y: self.latitude_hi },
        )
    }

    /// Converts the area to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}
