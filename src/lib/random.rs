use super::geo::Bbox;
use super::geometry::{Geometry, GeometryKind, Position};
use geo::prelude::*;
use geo_types::MultiPoint;
use rand::Rng;
use serde::Serialize;

const LINESTRING_VERTICES: usize = 10;
const POLYGON_VERTICES: usize = 10;
// parts per generated multi-geometry; `size` always counts whole geometries
const MULTI_PARTS: usize = 2;
const COLLECTION_MEMBERS: usize = 2;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Sample {
    One(Geometry),
    Many(Vec<Geometry>),
}

impl Sample {
    pub fn one(self) -> Option<Geometry> {
        match self {
            Sample::One(geometry) => Some(geometry),
            Sample::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<Geometry> {
        match self {
            Sample::One(geometry) => vec![geometry],
            Sample::Many(geometries) => geometries,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Sample::One(_) => 1,
            Sample::Many(geometries) => geometries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sample_range<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low < high {
        rng.gen_range(low..high)
    } else {
        low
    }
}

fn random_position<R: Rng>(rng: &mut R, bbox: &Bbox) -> Position {
    (
        sample_range(rng, bbox.w, bbox.e),
        sample_range(rng, bbox.s, bbox.n),
    )
}

fn line_string_coordinates<R: Rng>(rng: &mut R, bbox: &Bbox) -> Vec<Position> {
    (0..LINESTRING_VERTICES)
        .map(|_| random_position(rng, bbox))
        .collect()
}

fn polygon_ring<R: Rng>(rng: &mut R, bbox: &Bbox) -> Vec<Position> {
    let batch: Vec<Position> = (0..POLYGON_VERTICES)
        .map(|_| random_position(rng, bbox))
        .collect();
    let hull = MultiPoint::from(batch).convex_hull();
    let mut ring: Vec<Position> = hull.exterior().coords().map(|c| (c.x, c.y)).collect();
    // a collapsed batch can hull down to fewer than four coordinates; pad
    // with the closing coordinate to keep the ring shape
    if let Some(&first) = ring.first() {
        while ring.len() < 4 {
            ring.push(first);
        }
    }
    ring
}

fn simple_kind<R: Rng>(rng: &mut R) -> GeometryKind {
    match rng.gen_range(0..3) {
        0 => GeometryKind::Point,
        1 => GeometryKind::LineString,
        _ => GeometryKind::Polygon,
    }
}

pub(crate) fn sample_geometry<R: Rng>(kind: GeometryKind, rng: &mut R, bbox: &Bbox) -> Geometry {
    match kind {
        GeometryKind::Point => Geometry::Point {
            coordinates: random_position(rng, bbox),
        },
        GeometryKind::LineString => Geometry::LineString {
            coordinates: line_string_coordinates(rng, bbox),
        },
        GeometryKind::Polygon => Geometry::Polygon {
            coordinates: vec![polygon_ring(rng, bbox)],
        },
        GeometryKind::MultiPoint => Geometry::MultiPoint {
            coordinates: (0..MULTI_PARTS)
                .map(|_| random_position(rng, bbox))
                .collect(),
        },
        GeometryKind::MultiLineString => Geometry::MultiLineString {
            coordinates: (0..MULTI_PARTS)
                .map(|_| line_string_coordinates(rng, bbox))
                .collect(),
        },
        GeometryKind::MultiPolygon => Geometry::MultiPolygon {
            coordinates: (0..MULTI_PARTS).map(|_| vec![polygon_ring(rng, bbox)]).collect(),
        },
        GeometryKind::GeometryCollection => Geometry::GeometryCollection {
            geometries: (0..COLLECTION_MEMBERS)
                .map(|_| {
                    let kind = simple_kind(rng);
                    sample_geometry(kind, rng, bbox)
                })
                .collect(),
        },
        GeometryKind::Geometry => {
            let kind = simple_kind(rng);
            sample_geometry(kind, rng, bbox)
        }
    }
}

fn generate(kind: GeometryKind, size: usize, bbox: Option<Bbox>) -> Sample {
    let bbox = Bbox::resolve(bbox);
    let size = size.max(1);
    let mut rng = rand::thread_rng();
    let mut geometries: Vec<Geometry> = (0..size)
        .map(|_| sample_geometry(kind, &mut rng, &bbox))
        .collect();
    if geometries.len() == 1 {
        Sample::One(geometries.remove(0))
    } else {
        Sample::Many(geometries)
    }
}

pub fn random_point(size: usize, bbox: Option<Bbox>) -> Sample {
    generate(GeometryKind::Point, size, bbox)
}

pub fn random_line_string(size: usize, bbox: Option<Bbox>) -> Sample {
    generate(GeometryKind::LineString, size, bbox)
}

pub fn random_polygon(size: usize, bbox: Option<Bbox>) -> Sample {
    generate(GeometryKind::Polygon, size, bbox)
}

pub fn random_multi_point(size: usize, bbox: Option<Bbox>) -> Sample {
    generate(GeometryKind::MultiPoint, size, bbox)
}

pub fn random_multi_line_string(size: usize, bbox: Option<Bbox>) -> Sample {
    generate(GeometryKind::MultiLineString, size, bbox)
}

pub fn random_multi_polygon(size: usize, bbox: Option<Bbox>) -> Sample {
    generate(GeometryKind::MultiPolygon, size, bbox)
}

pub fn random_geometry(size: usize, bbox: Option<Bbox>) -> Sample {
    generate(GeometryKind::Geometry, size, bbox)
}

pub fn random_geometry_collection(size: usize, bbox: Option<Bbox>) -> Sample {
    generate(GeometryKind::GeometryCollection, size, bbox)
}





#[cfg(test)]
mod random_geometry_collection {
    use super::*;

    #[test]
    fn two_members() {
        let geometry = random_geometry_collection(1, None).one().unwrap();
        match geometry {
            Geometry::GeometryCollection { geometries } => {
                assert_eq!(geometries.len(), COLLECTION_MEMBERS)
            }
            other => panic!("expected a collection, got {:?}", other),
        }
    }
}
