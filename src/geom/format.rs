use crate::area::CodeArea;
use geo_types::Polygon;
use wkt::ToWkt;

/// Builds the closed polygon outlining a code area.
pub fn area_to_polygon(area: &CodeArea) -> Polygon<f64> {
    area.to_polygon()
}

/// Formats a polygon as Well-Known Text (e.g. "POLYGON((...))").
pub fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    polygon.wkt_string()
}

/// Formats a polygon as a GeoJSON geometry object.
pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}
