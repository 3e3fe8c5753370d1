use super::geo::Bbox;
use super::geometry::{Geometry, GeometryKind};
use super::random::sample_geometry;
use super::validate::conforms_to;
use serde_json::Value;

pub const GEO_2DSPHERE: &str = "2dsphere";

// one field definition per geometry kind, shaped like the descriptors an
// object-document mapper consumes: a typed value slot, a geospatial index,
// no default, a validator with a fixed message, and a fake-data generator
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub kind: GeometryKind,
    pub index: &'static str,
    pub default: Option<Geometry>,
}

impl SchemaField {
    pub fn of(kind: GeometryKind) -> Self {
        SchemaField {
            kind,
            index: GEO_2DSPHERE,
            default: None,
        }
    }

    pub fn validate(&self, candidate: &Value) -> bool {
        conforms_to(self.kind, candidate)
    }

    pub fn message(&self) -> String {
        format!("{{PATH}} is not a valid GeoJSON {}", self.kind.tag())
    }

    pub fn fake(&self) -> Geometry {
        self.fake_within(None)
    }

    pub fn fake_within(&self, bbox: Option<Bbox>) -> Geometry {
        let bbox = Bbox::resolve(bbox);
        sample_geometry(self.kind, &mut rand::thread_rng(), &bbox)
    }
}
