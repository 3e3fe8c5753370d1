use geojson_schemas::{
    centroid_of, is_geometry, parse_coordinate_string, parse_coordinate_string_with, random_point,
    to_coordinate_string, to_coordinate_string_with, Bbox, Geometry, GeometryKind, Parsed, Sample,
    SchemaField, GEO_2DSPHERE,
};

#[test]
fn point_string_round_trip() {
    let text = "30,10";
    let parsed = parse_coordinate_string(text).unwrap();
    match &parsed {
        Parsed::Geometry(Geometry::Point { coordinates }) => {
            assert_eq!(*coordinates, (30., 10.));
        }
        other => panic!("expected a point, got {:?}", other),
    }
    assert_eq!(to_coordinate_string(&parsed), text);
}

#[test]
fn polygon_string_round_trip() {
    let text = "35,10 45,45 15,40 10,20 35,10";
    let parsed = parse_coordinate_string(text).unwrap();
    let polygon = Geometry::Polygon {
        coordinates: vec![vec![
            (35., 10.),
            (45., 45.),
            (15., 40.),
            (10., 20.),
            (35., 10.),
        ]],
    };
    assert_eq!(parsed, Parsed::Geometry(polygon));
    assert_eq!(to_coordinate_string(&parsed), text);
}

#[test]
fn open_list_stays_raw() {
    let parsed = parse_coordinate_string("10,40 40,30 20,20 30,10").unwrap();
    let positions = parsed.coordinates().unwrap();
    assert_eq!(positions.len(), 4);
    assert_eq!(positions[0], (10., 40.));
}

#[test]
fn empty_and_malformed_input_degrade() {
    assert_eq!(parse_coordinate_string(""), None);
    assert_eq!(parse_coordinate_string("longitude,latitude"), None);
}

#[test]
fn alternate_separators_round_trip() {
    let text = "30;10|45;45|15;40|30;10";
    let parsed = parse_coordinate_string_with(text, ';', '|').unwrap();
    assert_eq!(to_coordinate_string_with(&parsed, ';', '|'), text);
}

#[test]
fn parsed_polygon_has_a_centroid() {
    let parsed = parse_coordinate_string("35,10 45,45 15,40 10,20 35,10").unwrap();
    let polygon = parsed.geometry().unwrap();
    let centroid = centroid_of(&polygon).unwrap();
    assert_eq!(centroid.kind(), GeometryKind::Point);
    assert_eq!(centroid_of(&polygon), Some(centroid));
}

#[test]
fn generated_geometries_validate() {
    for kind in GeometryKind::ALL {
        let field = SchemaField::of(kind);
        let fake = field.fake();
        let candidate = serde_json::to_value(&fake).unwrap();
        assert!(field.validate(&candidate), "kind {:?}", kind);
        assert!(is_geometry(&candidate), "kind {:?}", kind);
    }
}

#[test]
fn random_points_respect_count_and_bbox() {
    let bbox = Bbox::from([-70., 20., -50., 40.]);

    let single = random_point(1, Some(bbox));
    match single {
        Sample::One(Geometry::Point { coordinates }) => assert!(bbox.contains(coordinates)),
        other => panic!("expected a single point, got {:?}", other),
    }

    let pair = random_point(2, Some(bbox));
    assert_eq!(pair.len(), 2);
    for geometry in pair.into_vec() {
        assert_eq!(geometry.kind(), GeometryKind::Point);
    }
}

#[test]
fn schema_fields_describe_the_index_and_message() {
    for kind in GeometryKind::ALL {
        let field = SchemaField::of(kind);
        assert_eq!(field.index, GEO_2DSPHERE);
        assert_eq!(field.default, None);
        let message = field.message();
        assert!(message.starts_with("{PATH} is not a valid GeoJSON"));
        assert!(message.ends_with(kind.tag()));
    }
}
