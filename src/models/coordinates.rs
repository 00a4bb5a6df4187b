use serde::{Deserialize, Serialize};

/// A geographic point. Serializes as `{"lat", "lng"}`; deserializes from
/// either that object or a `[lat, lng]` pair, since the backend emits paths
/// in the pair form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "LatLngRepr")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LatLngRepr {
    Object { lat: f64, lng: f64 },
    Pair([f64; 2]),
}

impl From<LatLngRepr> for LatLng {
    fn from(repr: LatLngRepr) -> Self {
        match repr {
            LatLngRepr::Object { lat, lng } => LatLng { lat, lng },
            LatLngRepr::Pair([lat, lng]) => LatLng { lat, lng },
        }
    }
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(LatLng { lat, lng })
    }

    /// GeoJSON position, which is `[lng, lat]`.
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }
}
