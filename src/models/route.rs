use crate::models::LatLng;
use serde::{Deserialize, Serialize};

/// One candidate path between source and destination, as returned by the
/// routing backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    pub name: String,
    pub distance: String,
    pub duration: String,
    /// Safety rating on a 0-10 scale
    pub safety_score: f64,
    pub risk_level: String,
    pub safety_features: Vec<String>,
    pub coordinates: RouteCoordinates,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteCoordinates {
    pub start: LatLng,
    pub end: LatLng,
    /// Ordered polyline vertices
    pub path: Vec<LatLng>,
}

fn default_time_of_day() -> String {
    "day".to_string()
}

/// A source/destination/time-of-day search. Values are forwarded verbatim,
/// empty strings included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RouteQuery {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default = "default_time_of_day")]
    pub time_of_day: String,
}

impl RouteQuery {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        time_of_day: impl Into<String>,
    ) -> Self {
        RouteQuery {
            source: source.into(),
            destination: destination.into(),
            time_of_day: time_of_day.into(),
        }
    }
}

/// Success body of `POST /find-routes`. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindRoutesResponse {
    pub routes: Vec<Route>,
}

/// Full body the reference backend sends back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindRoutesReply {
    pub routes: Vec<Route>,
    pub total_routes: usize,
    pub time_of_day: String,
    pub message: String,
}
