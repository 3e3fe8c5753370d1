use super::geometry::GeometryKind;
use serde_json::Value;

fn conformant_value(candidate: &Value) -> Option<geojson::Value> {
    let geometry = geojson::Geometry::from_json_value(candidate.clone()).ok()?;
    Some(geometry.value)
}

pub fn is_point(candidate: &Value) -> bool {
    matches!(conformant_value(candidate), Some(geojson::Value::Point(_)))
}

pub fn is_line_string(candidate: &Value) -> bool {
    matches!(
        conformant_value(candidate),
        Some(geojson::Value::LineString(_))
    )
}

pub fn is_polygon(candidate: &Value) -> bool {
    matches!(conformant_value(candidate), Some(geojson::Value::Polygon(_)))
}

pub fn is_multi_point(candidate: &Value) -> bool {
    matches!(
        conformant_value(candidate),
        Some(geojson::Value::MultiPoint(_))
    )
}

pub fn is_multi_line_string(candidate: &Value) -> bool {
    matches!(
        conformant_value(candidate),
        Some(geojson::Value::MultiLineString(_))
    )
}

pub fn is_multi_polygon(candidate: &Value) -> bool {
    matches!(
        conformant_value(candidate),
        Some(geojson::Value::MultiPolygon(_))
    )
}

pub fn is_geometry_collection(candidate: &Value) -> bool {
    matches!(
        conformant_value(candidate),
        Some(geojson::Value::GeometryCollection(_))
    )
}

// a conformant geometry object is always one of the seven kinds, so parse
// success is the whole check
pub fn is_geometry(candidate: &Value) -> bool {
    conformant_value(candidate).is_some()
}

pub fn conforms_to(kind: GeometryKind, candidate: &Value) -> bool {
    match kind {
        GeometryKind::Point => is_point(candidate),
        GeometryKind::LineString => is_line_string(candidate),
        GeometryKind::Polygon => is_polygon(candidate),
        GeometryKind::MultiPoint => is_multi_point(candidate),
        GeometryKind::MultiLineString => is_multi_line_string(candidate),
        GeometryKind::MultiPolygon => is_multi_polygon(candidate),
        GeometryKind::GeometryCollection => is_geometry_collection(candidate),
        GeometryKind::Geometry => is_geometry(candidate),
    }
}
