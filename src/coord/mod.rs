use geo_types::{Coord, Point};

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples, `geo_types::Point<f64>` and
/// `geo_types::Coord<f64>`, so functions can accept any of them. Following
/// the GIS convention, x is the longitude and y the latitude.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (8.52, 47.36);
        assert_eq!(tuple.x(), 8.52);
        assert_eq!(tuple.y(), 47.36);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(8.52, 47.36);
        assert_eq!(point.x(), 8.52);
        assert_eq!(point.y(), 47.36);
    }

    #[test]
    fn test_coordinate_trait_coord() {
        let c = coord! { x: 8.52, y: 47.36 };
        assert_eq!(Coordinate::x(&c), 8.52);
        assert_eq!(Coordinate::y(&c), 47.36);
    }
}
