//! Area-based safety scoring used by the reference backend.

use crate::constants::{
    EMPTY_ROUTE_SCORE, MODERATE_SCORE_THRESHOLD, SAFE_SCORE_THRESHOLD, UNKNOWN_AREA_DAY_SCORE,
    UNKNOWN_AREA_NIGHT_SCORE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrowdDensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lighting {
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl Lighting {
    pub fn is_well_lit(&self) -> bool {
        matches!(self, Lighting::Good | Lighting::Excellent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaProfile {
    pub day_score: f64,
    pub night_score: f64,
    pub crowd_density: CrowdDensity,
    pub lighting: Lighting,
}

const fn profile(day: f64, night: f64, crowd: CrowdDensity, lighting: Lighting) -> AreaProfile {
    AreaProfile {
        day_score: day,
        night_score: night,
        crowd_density: crowd,
        lighting,
    }
}

/// Known areas of Delhi with their safety characteristics.
pub fn area_profile(area: &str) -> Option<AreaProfile> {
    use CrowdDensity::*;
    use Lighting::*;

    let p = match area {
        "connaught_place" => profile(8.0, 6.0, High, Good),
        "karol_bagh" => profile(7.0, 5.0, Medium, Moderate),
        "lajpat_nagar" => profile(7.0, 4.0, Medium, Poor),
        "nehru_place" => profile(6.0, 3.0, Low, Poor),
        "rajouri_garden" => profile(8.0, 7.0, High, Good),
        "dwarka" => profile(9.0, 8.0, High, Excellent),
        "gurgaon" => profile(8.0, 6.0, Medium, Good),
        "noida" => profile(7.0, 5.0, Medium, Moderate),
        _ => return None,
    };
    Some(p)
}

fn is_night(time_of_day: &str) -> bool {
    time_of_day == "night"
}

/// Mean area score for the time of day, rounded to one decimal.
/// Only `"night"` selects night scores; anything else counts as day.
pub fn calculate_safety_score(areas: &[&str], time_of_day: &str) -> f64 {
    if areas.is_empty() {
        return EMPTY_ROUTE_SCORE;
    }

    let total: f64 = areas
        .iter()
        .map(|area| match area_profile(area) {
            Some(p) if is_night(time_of_day) => p.night_score,
            Some(p) => p.day_score,
            None if is_night(time_of_day) => UNKNOWN_AREA_NIGHT_SCORE,
            None => UNKNOWN_AREA_DAY_SCORE,
        })
        .sum();

    (total / areas.len() as f64 * 10.0).round() / 10.0
}

pub fn safety_features(areas: &[&str], time_of_day: &str) -> Vec<String> {
    let mut features = Vec::new();

    let well_lit = areas
        .iter()
        .filter(|a| area_profile(a).is_some_and(|p| p.lighting.is_well_lit()))
        .count();
    if well_lit as f64 > areas.len() as f64 / 2.0 {
        features.push("Well-lit streets".to_string());
    }

    let crowded = areas
        .iter()
        .any(|a| area_profile(a).is_some_and(|p| p.crowd_density == CrowdDensity::High));
    if crowded {
        features.push("Crowded areas".to_string());
    }

    // Exactly "day" reads as daytime here, unlike the score which keys on "night".
    if time_of_day == "day" {
        features.push("Daytime travel".to_string());
    } else {
        features.push("Night travel - extra caution".to_string());
    }

    features.push("Main roads".to_string());
    features.push("Police patrol areas".to_string());
    features
}

pub fn risk_level(safety_score: f64) -> &'static str {
    if safety_score >= SAFE_SCORE_THRESHOLD {
        "Low"
    } else if safety_score >= MODERATE_SCORE_THRESHOLD {
        "Medium"
    } else {
        "High"
    }
}
