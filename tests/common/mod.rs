use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Router,
};
use saferoute::map::{MapRenderer, MapSettings, SceneFactory};
use saferoute::services::RouteClient;
use saferoute::ui::{PageView, RouteQueryController};
use std::sync::Arc;
use tokio::sync::Mutex;

#[allow(dead_code)]
pub type TestController = RouteQueryController<RouteClient, PageView, SceneFactory>;

/// Serve a router on an ephemeral loopback port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{}", addr)
}

/// Serve the reference backend.
#[allow(dead_code)]
pub async fn spawn_backend() -> String {
    spawn_server(saferoute::routes::create_router()).await
}

/// Raw request bodies seen by a fixture server.
pub type Captured = Arc<Mutex<Vec<String>>>;

#[derive(Clone)]
struct Fixture {
    status: StatusCode,
    body: String,
    captured: Captured,
}

async fn fixture_handler(State(fixture): State<Fixture>, body: String) -> impl IntoResponse {
    fixture.captured.lock().await.push(body);
    (
        fixture.status,
        [("content-type", "application/json")],
        fixture.body.clone(),
    )
}

/// A `/find-routes` endpoint that records request bodies and always answers
/// with the given status and body.
#[allow(dead_code)]
pub async fn spawn_fixture(status: StatusCode, body: &str) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let fixture = Fixture {
        status,
        body: body.to_string(),
        captured: captured.clone(),
    };
    let app = Router::new()
        .route("/find-routes", post(fixture_handler))
        .with_state(fixture);

    (spawn_server(app).await, captured)
}

/// Base URL where nothing is listening.
#[allow(dead_code)]
pub fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No address").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[allow(dead_code)]
pub fn controller_for(base_url: &str) -> TestController {
    RouteQueryController::new(
        RouteClient::new(base_url),
        PageView::new(),
        MapRenderer::new(SceneFactory::default(), MapSettings::default()),
    )
}

/// The single-route response used by the end-to-end checks.
#[allow(dead_code)]
pub const R1_RESPONSE: &str = r#"{"routes":[{"name":"R1","distance":"5km","duration":"10min","safety_score":8,"risk_level":"low","safety_features":["lighting","cctv"],"coordinates":{"start":{"lat":1,"lng":1},"end":{"lat":2,"lng":2},"path":[{"lat":1,"lng":1},{"lat":2,"lng":2}]}}]}"#;
