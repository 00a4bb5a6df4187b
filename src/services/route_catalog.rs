use crate::models::{LatLng, Route, RouteCoordinates};
use crate::services::safety::{calculate_safety_score, risk_level, safety_features};

const START: LatLng = LatLng {
    lat: 28.6139,
    lng: 77.2090,
};
const END: LatLng = LatLng {
    lat: 28.6304,
    lng: 77.2177,
};

struct RouteTemplate {
    name: &'static str,
    distance: &'static str,
    duration: &'static str,
    areas: &'static [&'static str],
    path: &'static [(f64, f64)],
}

const TEMPLATES: [RouteTemplate; 3] = [
    RouteTemplate {
        name: "Main Road Route",
        distance: "12.5 km",
        duration: "25 mins",
        areas: &["connaught_place", "rajouri_garden", "dwarka"],
        path: &[
            (28.6139, 77.2090),
            (28.6200, 77.2120),
            (28.6250, 77.2150),
            (28.6304, 77.2177),
        ],
    },
    RouteTemplate {
        name: "Alternative Route",
        distance: "10.8 km",
        duration: "22 mins",
        areas: &["karol_bagh", "lajpat_nagar"],
        path: &[
            (28.6139, 77.2090),
            (28.6180, 77.2100),
            (28.6220, 77.2130),
            (28.6280, 77.2160),
            (28.6304, 77.2177),
        ],
    },
    RouteTemplate {
        name: "Fastest Route",
        distance: "9.2 km",
        duration: "18 mins",
        areas: &["nehru_place", "lajpat_nagar"],
        path: &[
            (28.6139, 77.2090),
            (28.6170, 77.2110),
            (28.6240, 77.2140),
            (28.6304, 77.2177),
        ],
    },
];

impl RouteTemplate {
    fn build(&self, time_of_day: &str) -> Route {
        let score = calculate_safety_score(self.areas, time_of_day);
        Route {
            name: self.name.to_string(),
            distance: self.distance.to_string(),
            duration: self.duration.to_string(),
            safety_score: score,
            risk_level: risk_level(score).to_string(),
            safety_features: safety_features(self.areas, time_of_day),
            coordinates: RouteCoordinates {
                start: START,
                end: END,
                path: self
                    .path
                    .iter()
                    .map(|&(lat, lng)| LatLng { lat, lng })
                    .collect(),
            },
        }
    }
}

/// Fixed set of candidate routes through central Delhi, scored for the time
/// of day and ordered safest first. Ties keep catalog order.
pub fn generate_routes(time_of_day: &str) -> Vec<Route> {
    let mut routes: Vec<Route> = TEMPLATES.iter().map(|t| t.build(time_of_day)).collect();
    routes.sort_by(|a, b| b.safety_score.total_cmp(&a.safety_score));
    routes
}
