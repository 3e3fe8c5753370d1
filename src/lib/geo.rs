use super::geometry::{FlatCoordinates, Geometry, Position};
use geo::prelude::*;
use geo_types::{LineString, MultiPoint, Point};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::env;

pub const GEOJSON_DEFAULT_BBOX: &str = "GEOJSON_DEFAULT_BBOX";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Bbox {
    pub w: f64,
    pub s: f64,
    pub e: f64,
    pub n: f64,
}

impl Default for Bbox {
    fn default() -> Self {
        Bbox {
            w: -80.,
            s: 30.,
            e: -60.,
            n: 60.,
        }
    }
}

impl From<[f64; 4]> for Bbox {
    fn from(corners: [f64; 4]) -> Self {
        let [w, s, e, n] = corners;
        Bbox { w, s, e, n }
    }
}

impl From<Bbox> for [f64; 4] {
    fn from(bbox: Bbox) -> Self {
        [bbox.w, bbox.s, bbox.e, bbox.n]
    }
}

impl Bbox {
    pub fn parse(text: &str) -> Option<Bbox> {
        let numbers = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| fragment.parse().ok())
            .collect::<Option<Vec<f64>>>()?;
        match numbers[..] {
            [w, s, e, n] => Some(Bbox { w, s, e, n }),
            _ => None,
        }
    }

    pub fn from_env() -> Option<Bbox> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    pub fn from_env_with(read: impl Fn(&str) -> Option<String>) -> Option<Bbox> {
        read(GEOJSON_DEFAULT_BBOX).as_deref().and_then(Self::parse)
    }

    // explicit bbox -> environment override -> built-in default
    pub fn resolve(explicit: Option<Bbox>) -> Bbox {
        explicit.or_else(Self::from_env).unwrap_or_default()
    }

    pub fn contains(&self, position: Position) -> bool {
        let (x, y) = position;
        self.w <= x && x <= self.e && self.s <= y && y <= self.n
    }
}

pub fn is_closed_ring(positions: &[Position]) -> bool {
    if positions.len() < 4 {
        return false;
    }
    let ring: LineString<f64> = positions.to_vec().into();
    ring.is_closed()
}

pub fn centroid_of(geometry: &Geometry) -> Option<Geometry> {
    let vertices: Vec<Point<f64>> = geometry
        .flat_coordinates()
        .into_iter()
        .tuples::<(f64, f64)>()
        .map(|(x, y)| Point::new(x, y))
        .collect();
    let centroid = MultiPoint::from(vertices).centroid()?;
    Some(Geometry::Point {
        coordinates: (centroid.x(), centroid.y()),
    })
}
