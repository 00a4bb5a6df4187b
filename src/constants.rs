//! Stable application-wide constants.
//!
//! Values here are wire contracts, display thresholds, and default fallbacks
//! for env-var-based configuration. They should rarely change.
//! Runtime overrides live in [`Config`](crate::config::Config).

// --- Routing service (client side) ---

/// Default base URL of the routing backend. Overridden by `SAFEROUTE_API_URL`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// Path of the route search endpoint, relative to the base URL.
pub const FIND_ROUTES_PATH: &str = "/find-routes";
/// The only failure message ever shown to the user.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to find routes. Please try again.";

// --- Backend server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the reference backend.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the reference backend.
pub const DEFAULT_PORT: &str = "5000";

// --- Map defaults ---

/// Initial map center latitude (central Delhi). Overridden by `MAP_DEFAULT_LAT`.
pub const DEFAULT_MAP_CENTER_LAT: f64 = 28.6139;
/// Initial map center longitude. Overridden by `MAP_DEFAULT_LNG`.
pub const DEFAULT_MAP_CENTER_LNG: f64 = 77.2090;
/// Initial zoom level. Overridden by `MAP_DEFAULT_ZOOM`.
pub const DEFAULT_MAP_ZOOM: u8 = 12;
/// Highest zoom level the tile provider serves.
pub const MAX_MAP_ZOOM: u8 = 19;
/// Background tile URL template. Overridden by `MAP_TILE_URL`.
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Attribution shown with the tile layer. Overridden by `MAP_TILE_ATTRIBUTION`.
pub const DEFAULT_TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Polyline colors, cycled by route position.
pub const ROUTE_PALETTE: [&str; 5] = ["red", "blue", "green", "orange", "purple"];
/// Polyline stroke width in pixels.
pub const ROUTE_LINE_WEIGHT: u32 = 4;
/// Polyline stroke opacity.
pub const ROUTE_LINE_OPACITY: f64 = 0.7;
/// Fraction of the bounds span added on every side before fitting the viewport.
pub const FIT_BOUNDS_PADDING: f64 = 0.1;

// --- Safety bands ---
// Lower bounds are inclusive: 7.0 is Safe, 4.0 is Moderate.

/// Scores at or above this are "Safe".
pub const SAFE_SCORE_THRESHOLD: f64 = 7.0;
/// Scores at or above this (and below `SAFE_SCORE_THRESHOLD`) are "Moderate".
pub const MODERATE_SCORE_THRESHOLD: f64 = 4.0;

// --- Backend scoring fallbacks ---

/// Day score for an area missing from the safety table.
pub const UNKNOWN_AREA_DAY_SCORE: f64 = 5.0;
/// Night score for an area missing from the safety table.
pub const UNKNOWN_AREA_NIGHT_SCORE: f64 = 3.0;
/// Score reported for a route that crosses no known areas.
pub const EMPTY_ROUTE_SCORE: f64 = 5.0;
