use super::{MapFactory, MapInstance, Marker, Polyline, TileLayer};
use crate::models::{BoundingBox, LatLng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// What the map currently shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    Center { center: LatLng, zoom: u8 },
    Bounds(BoundingBox),
}

/// In-memory map that records every layer added to it.
#[derive(Debug)]
pub struct SceneMap {
    initial_center: LatLng,
    zoom: u8,
    viewport: Viewport,
    tile_layers: Vec<TileLayer>,
    markers: Vec<Marker>,
    polylines: Vec<Polyline>,
    live: Arc<AtomicUsize>,
}

impl SceneMap {
    pub fn initial_center(&self) -> LatLng {
        self.initial_center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }
}

impl MapInstance for SceneMap {
    fn add_tile_layer(&mut self, layer: TileLayer) {
        self.tile_layers.push(layer);
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn add_polyline(&mut self, polyline: Polyline) {
        self.polylines.push(polyline);
    }

    fn fit_bounds(&mut self, bounds: BoundingBox) {
        self.viewport = Viewport::Bounds(bounds);
    }

    fn remove(self) {
        self.live.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Creates [`SceneMap`]s and tracks how many are still alive.
#[derive(Debug, Default)]
pub struct SceneFactory {
    created: usize,
    live: Arc<AtomicUsize>,
}

impl SceneFactory {
    pub fn created(&self) -> usize {
        self.created
    }

    /// Instances created but not yet removed.
    pub fn live_instances(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }
}

impl MapFactory for SceneFactory {
    type Map = SceneMap;

    fn create(&mut self, center: LatLng, zoom: u8) -> SceneMap {
        self.created += 1;
        self.live.fetch_add(1, Ordering::Relaxed);
        SceneMap {
            initial_center: center,
            zoom,
            viewport: Viewport::Center { center, zoom },
            tile_layers: Vec::new(),
            markers: Vec::new(),
            polylines: Vec::new(),
            live: Arc::clone(&self.live),
        }
    }
}
