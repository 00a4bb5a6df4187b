use crate::error::{AppError, Result};
use axum::Json;
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// GET / - Service banner
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "SafeRoute AI Backend API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health
pub async fn health_check() -> Result<Json<Value>> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| AppError::Internal(format!("Failed to format timestamp: {}", e)))?;

    Ok(Json(json!({
        "status": "healthy",
        "timestamp": timestamp,
    })))
}
