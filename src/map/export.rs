use super::{SceneMap, Viewport};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

fn feature(geometry: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Export a rendered scene as a GeoJSON FeatureCollection. Markers become
/// Points, polylines become LineStrings, and the fitted viewport (if any)
/// becomes the collection `bbox`.
pub fn scene_to_geojson(scene: &SceneMap) -> FeatureCollection {
    let mut features = Vec::with_capacity(scene.markers().len() + scene.polylines().len());

    for marker in scene.markers() {
        let mut props = JsonObject::new();
        props.insert("kind".to_string(), json!("marker"));
        props.insert("popup".to_string(), json!(marker.popup));
        features.push(feature(Value::Point(marker.position.to_position()), props));
    }

    for line in scene.polylines() {
        let mut props = JsonObject::new();
        props.insert("kind".to_string(), json!("route"));
        props.insert("popup".to_string(), json!(line.popup));
        props.insert("stroke".to_string(), json!(line.color));
        props.insert("stroke-width".to_string(), json!(line.weight));
        props.insert("stroke-opacity".to_string(), json!(line.opacity));
        let positions = line.points.iter().map(|p| p.to_position()).collect();
        features.push(feature(Value::LineString(positions), props));
    }

    let bbox = match scene.viewport() {
        Viewport::Bounds(bounds) => Some(bounds.to_geojson_bbox()),
        Viewport::Center { .. } => None,
    };

    let mut members = JsonObject::new();
    if let Some(layer) = scene.tile_layers().first() {
        members.insert("tiles".to_string(), json!(layer.url_template));
        members.insert("attribution".to_string(), json!(layer.attribution));
    }

    FeatureCollection {
        bbox,
        features,
        foreign_members: if members.is_empty() { None } else { Some(members) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{MapFactory, MapInstance, Marker, Polyline, SceneFactory, TileLayer};
    use crate::models::{BoundingBox, LatLng};

    #[test]
    fn test_export_scene() {
        let mut factory = SceneFactory::default();
        let mut map = factory.create(LatLng { lat: 0.0, lng: 0.0 }, 12);
        map.add_tile_layer(TileLayer {
            url_template: "https://tiles/{z}/{x}/{y}.png".to_string(),
            attribution: "tiles".to_string(),
        });
        map.add_marker(Marker {
            position: LatLng { lat: 1.0, lng: 2.0 },
            popup: "Start: R1".to_string(),
        });
        map.add_polyline(Polyline {
            points: vec![LatLng { lat: 1.0, lng: 2.0 }, LatLng { lat: 3.0, lng: 4.0 }],
            color: "red".to_string(),
            weight: 4,
            opacity: 0.7,
            popup: "R1 - Safety: 8/10".to_string(),
        });
        map.fit_bounds(BoundingBox {
            min_lat: 1.0,
            max_lat: 3.0,
            min_lng: 2.0,
            max_lng: 4.0,
        });

        let collection = scene_to_geojson(&map);
        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.bbox, Some(vec![2.0, 1.0, 4.0, 3.0]));

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["features"][0]["geometry"]["type"], "Point");
        assert_eq!(json["features"][0]["geometry"]["coordinates"], json!([2.0, 1.0]));
        assert_eq!(json["features"][1]["geometry"]["type"], "LineString");
        assert_eq!(json["features"][1]["properties"]["stroke"], "red");
        assert_eq!(json["tiles"], "https://tiles/{z}/{x}/{y}.png");
        map.remove();
    }

    #[test]
    fn test_export_unfitted_scene_has_no_bbox() {
        let mut factory = SceneFactory::default();
        let map = factory.create(LatLng { lat: 0.0, lng: 0.0 }, 12);
        let collection = scene_to_geojson(&map);
        assert!(collection.features.is_empty());
        assert!(collection.bbox.is_none());
        assert!(collection.foreign_members.is_none());
        map.remove();
    }
}
