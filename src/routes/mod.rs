pub mod find_routes;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/find-routes", post(find_routes::find_routes))
        .route("/health", get(health::health_check))
}
