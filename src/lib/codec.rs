use super::geo::is_closed_ring;
use super::geometry::{FlatCoordinates, Geometry, Position};
use itertools::Itertools;

pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_SEPARATOR: char = ' ';

#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Geometry(Geometry),
    Coordinates(Vec<Position>),
}

impl Parsed {
    pub fn geometry(self) -> Option<Geometry> {
        match self {
            Parsed::Geometry(geometry) => Some(geometry),
            Parsed::Coordinates(_) => None,
        }
    }

    pub fn coordinates(self) -> Option<Vec<Position>> {
        match self {
            Parsed::Geometry(_) => None,
            Parsed::Coordinates(positions) => Some(positions),
        }
    }
}

impl FlatCoordinates for Parsed {
    fn flat_coordinates(&self) -> Vec<f64> {
        match self {
            Parsed::Geometry(geometry) => geometry.flat_coordinates(),
            Parsed::Coordinates(positions) => positions.flat_coordinates(),
        }
    }
}

fn parse_pair(token: &str, delimiter: char) -> Option<Position> {
    let mut parts = token.split(delimiter);
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Parse a delimited coordinate string into a geometry or a coordinate list
///
/// A single `x,y` pair becomes a Point. A list of pairs forming a closed
/// ring (first equals last, at least four pairs) becomes a Polygon with
/// that ring as its exterior. Any other pair list is passed through as raw
/// coordinates. Malformed numeric input yields `None`.
///
/// # Example
///
/// ```
/// use geojson_schemas::{parse_coordinate_string, Geometry, Parsed};
///
/// let parsed = parse_coordinate_string("30,10").unwrap();
/// let point = Geometry::Point { coordinates: (30., 10.) };
/// assert_eq!(parsed, Parsed::Geometry(point));
/// ```
pub fn parse_coordinate_string(coords: &str) -> Option<Parsed> {
    parse_coordinate_string_with(coords, DEFAULT_DELIMITER, DEFAULT_SEPARATOR)
}

pub fn parse_coordinate_string_with(
    coords: &str,
    delimiter: char,
    separator: char,
) -> Option<Parsed> {
    if coords.is_empty() {
        return None;
    }
    let positions = coords
        .split(separator)
        .filter(|token| !token.is_empty())
        .map(|token| parse_pair(token, delimiter))
        .collect::<Option<Vec<Position>>>()?;

    // a single well-formed position always wins as a Point; ring detection
    // only runs on multi-pair input
    if let [(x, y)] = positions[..] {
        if x.is_finite() && y.is_finite() {
            return Some(Parsed::Geometry(Geometry::Point {
                coordinates: (x, y),
            }));
        }
    }

    if is_closed_ring(&positions) {
        return Some(Parsed::Geometry(Geometry::Polygon {
            coordinates: vec![positions],
        }));
    }

    Some(Parsed::Coordinates(positions))
}

pub fn to_coordinate_string<T>(value: &T) -> String
where
    T: FlatCoordinates + ?Sized,
{
    to_coordinate_string_with(value, DEFAULT_DELIMITER, DEFAULT_SEPARATOR)
}

pub fn to_coordinate_string_with<T>(value: &T, delimiter: char, separator: char) -> String
where
    T: FlatCoordinates + ?Sized,
{
    let delimiter = delimiter.to_string();
    let separator = separator.to_string();
    value
        .flat_coordinates()
        .chunks(2)
        .map(|pair| pair.iter().map(f64::to_string).join(&delimiter))
        .join(&separator)
}
