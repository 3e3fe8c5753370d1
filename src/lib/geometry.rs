use serde::{Deserialize, Serialize};

pub type Position = (f64, f64);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPoint { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Geometry,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 8] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
        GeometryKind::Geometry,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
            GeometryKind::Geometry => "Geometry",
        }
    }
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point { .. } => GeometryKind::Point,
            Geometry::LineString { .. } => GeometryKind::LineString,
            Geometry::Polygon { .. } => GeometryKind::Polygon,
            Geometry::MultiPoint { .. } => GeometryKind::MultiPoint,
            Geometry::MultiLineString { .. } => GeometryKind::MultiLineString,
            Geometry::MultiPolygon { .. } => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection { .. } => GeometryKind::GeometryCollection,
        }
    }
}

pub trait FlatCoordinates {
    fn flat_coordinates(&self) -> Vec<f64>;
}

impl FlatCoordinates for Position {
    fn flat_coordinates(&self) -> Vec<f64> {
        vec![self.0, self.1]
    }
}

impl FlatCoordinates for [Position] {
    fn flat_coordinates(&self) -> Vec<f64> {
        self.iter().flat_map(|&(x, y)| [x, y]).collect()
    }
}

impl FlatCoordinates for Vec<Position> {
    fn flat_coordinates(&self) -> Vec<f64> {
        self.as_slice().flat_coordinates()
    }
}

impl FlatCoordinates for Geometry {
    fn flat_coordinates(&self) -> Vec<f64> {
        match self {
            Geometry::Point { coordinates } => coordinates.flat_coordinates(),
            Geometry::LineString { coordinates } | Geometry::MultiPoint { coordinates } => {
                coordinates.flat_coordinates()
            }
            Geometry::Polygon { coordinates } | Geometry::MultiLineString { coordinates } => {
                coordinates
                    .iter()
                    .flat_map(|ring| ring.flat_coordinates())
                    .collect()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flatten()
                .flat_map(|ring| ring.flat_coordinates())
                .collect(),
            Geometry::GeometryCollection { geometries } => geometries
                .iter()
                .flat_map(|geometry| geometry.flat_coordinates())
                .collect(),
        }
    }
}


#[cfg(test)]
mod serde_shape {
    use super::*;
    use serde_json::json;

    #[test]
    fn point_is_tagged() {
        let point = Geometry::Point {
            coordinates: (30., 10.),
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value, json!({ "type": "Point", "coordinates": [30.0, 10.0] }));
    }

    #[test]
    fn polygon_round_trips() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[35.0, 10.0], [45.0, 45.0], [15.0, 40.0], [35.0, 10.0]]],
        });
        let polygon: Geometry = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(polygon.kind(), GeometryKind::Polygon);
        assert_eq!(serde_json::to_value(&polygon).unwrap(), value);
    }

    #[test]
    fn collection_uses_geometries_key() {
        let collection = Geometry::GeometryCollection {
            geometries: vec![Geometry::Point {
                coordinates: (5., 49.),
            }],
        };
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["type"], "GeometryCollection");
        assert!(value["geometries"].is_array());
    }
}
