//! Map rendering over an abstract map surface.
//!
//! A [`MapFactory`] produces [`MapInstance`]s; the controller keeps at most one
//! live instance in a [`MapSlot`] and releases it before creating the next.

pub mod export;
pub mod renderer;
pub mod scene;

pub use renderer::MapRenderer;
pub use scene::{SceneFactory, SceneMap, Viewport};

use crate::constants::*;
use crate::models::{BoundingBox, LatLng};

#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// Initial center, independent of the routes drawn
    pub center: LatLng,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub palette: Vec<String>,
    pub line_weight: u32,
    pub line_opacity: f64,
    /// Fraction of the bounds span added on every side when fitting
    pub fit_padding: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: LatLng {
                lat: DEFAULT_MAP_CENTER_LAT,
                lng: DEFAULT_MAP_CENTER_LNG,
            },
            zoom: DEFAULT_MAP_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            palette: ROUTE_PALETTE.iter().map(|c| c.to_string()).collect(),
            line_weight: ROUTE_LINE_WEIGHT,
            line_opacity: ROUTE_LINE_OPACITY,
            fit_padding: FIT_BOUNDS_PADDING,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<LatLng>,
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    pub popup: String,
}

/// A live map owned by whoever created it.
pub trait MapInstance {
    fn add_tile_layer(&mut self, layer: TileLayer);
    fn add_marker(&mut self, marker: Marker);
    fn add_polyline(&mut self, polyline: Polyline);
    fn fit_bounds(&mut self, bounds: BoundingBox);
    /// Tear the map down and free whatever it holds.
    fn remove(self)
    where
        Self: Sized;
}

pub trait MapFactory {
    type Map: MapInstance;

    fn create(&mut self, center: LatLng, zoom: u8) -> Self::Map;
}

/// Holds at most one live map.
pub struct MapSlot<M: MapInstance> {
    current: Option<M>,
}

impl<M: MapInstance> Default for MapSlot<M> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<M: MapInstance> MapSlot<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tear down the held map, if any.
    pub fn release(&mut self) {
        if let Some(map) = self.current.take() {
            tracing::debug!("Removing previous map instance");
            map.remove();
        }
    }

    /// Release the held map, then create and hold a fresh one.
    pub fn acquire<F>(&mut self, factory: &mut F, center: LatLng, zoom: u8) -> &mut M
    where
        F: MapFactory<Map = M>,
    {
        self.release();
        self.current.insert(factory.create(center, zoom))
    }

    pub fn get(&self) -> Option<&M> {
        self.current.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }
}

impl<M: MapInstance> Drop for MapSlot<M> {
    fn drop(&mut self) {
        self.release();
    }
}
