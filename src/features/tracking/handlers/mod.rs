pub mod tracking_handler;

pub use tracking_handler::{__path_get_tracking, get_tracking, TrackingState};
