pub mod bounds;
pub mod coordinates;
pub mod route;

pub use bounds::BoundingBox;
pub use coordinates::LatLng;
pub use route::{FindRoutesReply, FindRoutesResponse, Route, RouteCoordinates, RouteQuery};
