use super::form::QueryForm;
use super::view::{View, ViewState};
use super::view_model::ViewModel;
use crate::constants::GENERIC_ERROR_MESSAGE;
use crate::error::Result;
use crate::map::{MapFactory, MapRenderer};
use crate::models::{Route, RouteQuery};
use crate::services::RouteSource;

/// Identifies one submission. Only the most recently issued ticket may
/// update the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered { routes: usize },
    Failed,
    /// A newer submission was issued; the response was dropped.
    Stale,
}

/// Drives one search at a time from form to cards and map.
pub struct RouteQueryController<S, V, F>
where
    F: MapFactory,
{
    source: S,
    view: V,
    map: MapRenderer<F>,
    latest: u64,
}

impl<S, V, F> RouteQueryController<S, V, F>
where
    S: RouteSource,
    V: View,
    F: MapFactory,
{
    pub fn new(source: S, view: V, map: MapRenderer<F>) -> Self {
        RouteQueryController {
            source,
            view,
            map,
            latest: 0,
        }
    }

    /// Form submission: read the fields and search, no validation.
    pub async fn submit(&mut self, form: &QueryForm) -> Outcome {
        self.find_routes(form.to_query()).await
    }

    pub async fn find_routes(&mut self, query: RouteQuery) -> Outcome {
        let ticket = self.begin();
        let result = self.source.find_routes(&query).await;
        self.complete(ticket, result)
    }

    /// Show the loading state and issue a ticket for the coming response.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.view.apply_state(ViewState::Loading);
        RequestTicket(self.latest)
    }

    /// Apply a response. Responses for anything but the latest ticket are
    /// discarded without touching the display.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<Vec<Route>>) -> Outcome {
        if ticket.0 != self.latest {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "Discarding stale route response"
            );
            return Outcome::Stale;
        }

        match result {
            Ok(routes) => {
                self.display_routes(&routes);
                Outcome::Rendered {
                    routes: routes.len(),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Route search failed: {}", e);
                self.show_error(GENERIC_ERROR_MESSAGE);
                Outcome::Failed
            }
        }
    }

    fn display_routes(&mut self, routes: &[Route]) {
        self.view.apply_state(ViewState::Results);
        self.view.render(&ViewModel::results(routes));
        self.map.render(routes);
        tracing::info!(routes = routes.len(), "Displayed {} routes", routes.len());
    }

    pub fn show_error(&mut self, message: &str) {
        self.view.apply_state(ViewState::Error);
        self.view.render(&ViewModel::error(message));
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn map(&self) -> &MapRenderer<F> {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::map::{MapSettings, SceneFactory};
    use crate::models::{LatLng, RouteCoordinates};
    use crate::ui::page::{PageView, LOADING_ID, MAP_ID, RESULTS_ID};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays canned results and records every query it sees.
    struct FakeSource {
        responses: Mutex<Vec<Result<Vec<Route>>>>,
        seen: Mutex<Vec<RouteQuery>>,
    }

    impl FakeSource {
        fn new(responses: Vec<Result<Vec<Route>>>) -> Self {
            FakeSource {
                responses: Mutex::new(responses),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RouteSource for FakeSource {
        async fn find_routes(&self, query: &RouteQuery) -> Result<Vec<Route>> {
            self.seen.lock().unwrap().push(query.clone());
            self.responses.lock().unwrap().remove(0)
        }
    }

    fn route(name: &str, score: f64) -> Route {
        let a = LatLng { lat: 1.0, lng: 1.0 };
        let b = LatLng { lat: 2.0, lng: 2.0 };
        Route {
            name: name.to_string(),
            distance: "5km".to_string(),
            duration: "10min".to_string(),
            safety_score: score,
            risk_level: "low".to_string(),
            safety_features: vec!["lighting".to_string()],
            coordinates: RouteCoordinates {
                start: a,
                end: b,
                path: vec![a, b],
            },
        }
    }

    fn controller(
        responses: Vec<Result<Vec<Route>>>,
    ) -> RouteQueryController<FakeSource, PageView, SceneFactory> {
        RouteQueryController::new(
            FakeSource::new(responses),
            PageView::new(),
            MapRenderer::new(SceneFactory::default(), MapSettings::default()),
        )
    }

    #[tokio::test]
    async fn test_success_renders_cards_and_map() {
        let routes = vec![route("R1", 8.0), route("R2", 5.0), route("R3", 1.0)];
        let mut ctl = controller(vec![Ok(routes)]);

        let outcome = ctl.find_routes(RouteQuery::new("A", "B", "day")).await;
        assert_eq!(outcome, Outcome::Rendered { routes: 3 });

        let page = ctl.view();
        assert_eq!(page.card_count(), 3);
        assert!(!page.is_visible(LOADING_ID));
        assert!(page.is_visible(RESULTS_ID));
        assert!(page.is_visible(MAP_ID));

        let map = ctl.map().current().unwrap();
        assert_eq!(map.markers().len(), 6);
        assert_eq!(map.polylines().len(), 3);
    }

    #[tokio::test]
    async fn test_failure_shows_generic_message() {
        let mut ctl = controller(vec![Err(AppError::Status {
            status: 500,
            body: "boom".to_string(),
        })]);

        let outcome = ctl.find_routes(RouteQuery::default()).await;
        assert_eq!(outcome, Outcome::Failed);

        let page = ctl.view();
        assert!(page
            .route_list_html()
            .contains("Failed to find routes. Please try again."));
        assert!(!page.route_list_html().contains("boom"));
        assert!(!page.is_visible(LOADING_ID));
        assert!(page.is_visible(RESULTS_ID));
        assert!(!page.is_visible(MAP_ID));
    }

    #[tokio::test]
    async fn test_error_after_success_hides_previous_map() {
        let mut ctl = controller(vec![
            Ok(vec![route("R1", 8.0)]),
            Err(AppError::Decode("bad".to_string())),
        ]);

        ctl.find_routes(RouteQuery::default()).await;
        assert!(ctl.view().is_visible(MAP_ID));

        ctl.find_routes(RouteQuery::default()).await;
        assert!(!ctl.view().is_visible(MAP_ID));
        assert_eq!(ctl.view().state(), ViewState::Error);
    }

    #[tokio::test]
    async fn test_empty_form_still_searches() {
        let mut ctl = controller(vec![Ok(vec![])]);
        let outcome = ctl.submit(&QueryForm::new()).await;

        assert_eq!(outcome, Outcome::Rendered { routes: 0 });
        let seen = ctl.source.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].source, "");
        assert_eq!(seen[0].destination, "");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut ctl = controller(vec![]);

        let first = ctl.begin();
        let second = ctl.begin();
        assert!(second > first);

        assert_eq!(
            ctl.complete(second, Ok(vec![route("Fresh", 9.0)])),
            Outcome::Rendered { routes: 1 }
        );
        assert_eq!(
            ctl.complete(first, Ok(vec![route("Old", 1.0), route("Older", 2.0)])),
            Outcome::Stale
        );

        assert_eq!(ctl.view().card_count(), 1);
        assert!(ctl.view().route_list_html().contains("Fresh"));
        assert_eq!(ctl.map().factory().created(), 1);
    }

    #[test]
    fn test_stale_failure_does_not_clobber_results() {
        let mut ctl = controller(vec![]);
        let first = ctl.begin();
        let second = ctl.begin();

        ctl.complete(second, Ok(vec![route("Fresh", 9.0)]));
        let outcome = ctl.complete(first, Err(AppError::Internal("late".to_string())));

        assert_eq!(outcome, Outcome::Stale);
        assert_eq!(ctl.view().state(), ViewState::Results);
    }

    #[tokio::test]
    async fn test_repeated_searches_keep_one_map() {
        let mut ctl = controller(vec![
            Ok(vec![route("R1", 8.0)]),
            Ok(vec![route("R2", 8.0)]),
            Ok(vec![route("R3", 8.0)]),
        ]);
        for _ in 0..3 {
            ctl.find_routes(RouteQuery::default()).await;
        }
        assert_eq!(ctl.map().factory().created(), 3);
        assert_eq!(ctl.map().factory().live_instances(), 1);
    }
}
