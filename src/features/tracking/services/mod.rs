mod responders;
mod route_planner;

pub use responders::responder_units;
pub use route_planner::{advance, build_route, position_at, PROGRESS_STEP};
