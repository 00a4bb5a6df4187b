use crate::models::LatLng;
use geo::{BoundingRect, MultiPoint, Point};

/// Axis-aligned bounding box in geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` when there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LatLng>,
    {
        let multi: MultiPoint<f64> = points
            .into_iter()
            .map(|p| Point::new(p.lng, p.lat))
            .collect::<Vec<_>>()
            .into();

        multi.bounding_rect().map(|rect| BoundingBox {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lng: rect.min().x,
            max_lng: rect.max().x,
        })
    }

    /// Grow every side by `ratio` times the span on that axis.
    pub fn pad(&self, ratio: f64) -> Self {
        let lat_buffer = (self.max_lat - self.min_lat).abs() * ratio;
        let lng_buffer = (self.max_lng - self.min_lng).abs() * ratio;

        BoundingBox {
            min_lat: self.min_lat - lat_buffer,
            max_lat: self.max_lat + lat_buffer,
            min_lng: self.min_lng - lng_buffer,
            max_lng: self.max_lng + lng_buffer,
        }
    }

    pub fn contains(&self, point: &LatLng) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }

    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.min_lat + self.max_lat) / 2.0,
            lng: (self.min_lng + self.max_lng) / 2.0,
        }
    }

    /// GeoJSON bbox order: `[west, south, east, north]`.
    pub fn to_geojson_bbox(&self) -> Vec<f64> {
        vec![self.min_lng, self.min_lat, self.max_lng, self.max_lat]
    }
}
