mod route;

pub use route::{GeoPoint, ResponderUnit};
