use crate::error::{AppError, Result};
use crate::models::{FindRoutesReply, RouteQuery};
use crate::services::route_catalog;
use axum::extract::rejection::JsonRejection;
use axum::Json;

/// POST /find-routes
/// Score the candidate routes for the requested time of day
pub async fn find_routes(
    payload: std::result::Result<Json<RouteQuery>, JsonRejection>,
) -> Result<Json<FindRoutesReply>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let source = request.source.to_lowercase();
    let destination = request.destination.to_lowercase();
    let time_of_day = request.time_of_day;

    if source.is_empty() || destination.is_empty() {
        return Err(AppError::InvalidRequest(
            "Source and destination are required".to_string(),
        ));
    }

    tracing::info!(
        source = %source,
        destination = %destination,
        time_of_day = %time_of_day,
        "Route search: {} -> {} ({})",
        source, destination, time_of_day
    );

    let routes = route_catalog::generate_routes(&time_of_day);

    Ok(Json(FindRoutesReply {
        total_routes: routes.len(),
        message: format!(
            "Found {} routes from {} to {}",
            routes.len(),
            source,
            destination
        ),
        routes,
        time_of_day,
    }))
}
