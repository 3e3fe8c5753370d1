pub use self::codec::{
    parse_coordinate_string, parse_coordinate_string_with, to_coordinate_string,
    to_coordinate_string_with, Parsed, DEFAULT_DELIMITER, DEFAULT_SEPARATOR,
};
pub use self::geo::{centroid_of, is_closed_ring, Bbox, GEOJSON_DEFAULT_BBOX};
pub use self::geometry::{FlatCoordinates, Geometry, GeometryKind, Position};
pub use self::random::{
    random_geometry, random_geometry_collection, random_line_string, random_multi_line_string,
    random_multi_point, random_multi_polygon, random_point, random_polygon, Sample,
};
pub use self::schema::{SchemaField, GEO_2DSPHERE};
pub use self::validate::{
    conforms_to, is_geometry, is_geometry_collection, is_line_string, is_multi_line_string,
    is_multi_point, is_multi_polygon, is_point, is_polygon,
};

mod codec;
mod geo;
mod geometry;
mod random;
mod schema;
mod validate;
