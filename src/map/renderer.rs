use super::{MapFactory, MapInstance, MapSettings, MapSlot, Marker, Polyline, TileLayer};
use crate::models::{BoundingBox, Route};

/// Color for the route at `index`, cycling through the palette.
pub fn route_color(palette: &[String], index: usize) -> &str {
    if palette.is_empty() {
        return "";
    }
    &palette[index % palette.len()]
}

/// Bounds of every path point of every route. Start/end markers are not
/// included, only the paths.
pub fn routes_bounds(routes: &[Route]) -> Option<BoundingBox> {
    BoundingBox::from_points(routes.iter().flat_map(|r| r.coordinates.path.iter()))
}

/// Draw routes onto an already created map.
pub fn draw_routes<M: MapInstance>(map: &mut M, routes: &[Route], settings: &MapSettings) {
    map.add_tile_layer(TileLayer {
        url_template: settings.tile_url.clone(),
        attribution: settings.attribution.clone(),
    });

    for (index, route) in routes.iter().enumerate() {
        map.add_marker(Marker {
            position: route.coordinates.start,
            popup: format!("Start: {}", route.name),
        });
        map.add_marker(Marker {
            position: route.coordinates.end,
            popup: format!("End: {}", route.name),
        });
        map.add_polyline(Polyline {
            points: route.coordinates.path.clone(),
            color: route_color(&settings.palette, index).to_string(),
            weight: settings.line_weight,
            opacity: settings.line_opacity,
            popup: format!("{} - Safety: {}/10", route.name, route.safety_score),
        });
    }

    if let Some(bounds) = routes_bounds(routes) {
        map.fit_bounds(bounds.pad(settings.fit_padding));
    }
}

/// Owns the map slot; every render replaces the previous map.
pub struct MapRenderer<F: MapFactory> {
    factory: F,
    slot: MapSlot<F::Map>,
    settings: MapSettings,
}

impl<F: MapFactory> MapRenderer<F> {
    pub fn new(factory: F, settings: MapSettings) -> Self {
        MapRenderer {
            factory,
            slot: MapSlot::new(),
            settings,
        }
    }

    pub fn render(&mut self, routes: &[Route]) {
        let map = self
            .slot
            .acquire(&mut self.factory, self.settings.center, self.settings.zoom);
        draw_routes(map, routes, &self.settings);

        tracing::debug!(
            routes = routes.len(),
            "Map rendered with {} routes",
            routes.len()
        );
    }

    pub fn current(&self) -> Option<&F::Map> {
        self.slot.get()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }
}
