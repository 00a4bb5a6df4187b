use super::badge::SafetyBand;
use crate::models::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Everything a view needs to draw one route card.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCard {
    pub index: usize,
    pub name: String,
    pub badge: SafetyBand,
    pub details: Vec<DetailField>,
    /// Safety features joined with `", "`
    pub safety_features: String,
}

impl RouteCard {
    pub fn from_route(index: usize, route: &Route) -> Self {
        RouteCard {
            index,
            name: route.name.clone(),
            badge: SafetyBand::classify(route.safety_score),
            details: vec![
                DetailField {
                    label: "Distance",
                    value: route.distance.clone(),
                },
                DetailField {
                    label: "Duration",
                    value: route.duration.clone(),
                },
                DetailField {
                    label: "Safety Score",
                    value: format!("{}/10", route.safety_score),
                },
                DetailField {
                    label: "Risk Level",
                    value: route.risk_level.clone(),
                },
            ],
            safety_features: route.safety_features.join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorNotice {
    pub heading: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Results(Vec<RouteCard>),
    Error(ErrorNotice),
}

impl ViewModel {
    pub fn results(routes: &[Route]) -> Self {
        ViewModel::Results(
            routes
                .iter()
                .enumerate()
                .map(|(i, r)| RouteCard::from_route(i, r))
                .collect(),
        )
    }

    pub fn error(message: impl Into<String>) -> Self {
        ViewModel::Error(ErrorNotice {
            heading: "Error",
            message: message.into(),
        })
    }
}
