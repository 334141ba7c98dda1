mod format;

pub use format::{area_to_polygon, polygon_to_geojson, polygon_to_wkt};
