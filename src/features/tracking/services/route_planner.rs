//! Simulated responder route for the live map.
//!
//! The responder starts a short way north-east of the incident and follows a
//! gently curved path to it. Animation state is a single progress value in
//! 0..=1 owned by the caller.

use std::f64::consts::PI;

use crate::features::tracking::models::GeoPoint;

const START_OFFSET_LAT: f64 = 0.015;
const START_OFFSET_LNG: f64 = 0.012;
const ROUTE_STEPS: usize = 20;
const CURVE_AMPLITUDE: f64 = 0.003;

/// Progress added per animation tick
pub const PROGRESS_STEP: f64 = 0.002;

/// Route from the responder's start point to the incident, `ROUTE_STEPS + 1` points
pub fn build_route(incident: GeoPoint) -> Vec<GeoPoint> {
    let start = GeoPoint::new(
        incident.lat + START_OFFSET_LAT,
        incident.lng + START_OFFSET_LNG,
    );

    (0..=ROUTE_STEPS)
        .map(|i| {
            let t = i as f64 / ROUTE_STEPS as f64;
            let curve = (t * PI).sin() * CURVE_AMPLITUDE;
            let straight = start.lerp(&incident, t);
            GeoPoint::new(straight.lat + curve, straight.lng - curve * 0.5)
        })
        .collect()
}

/// Responder position after `progress` of the route. `None` for an empty route.
pub fn position_at(route: &[GeoPoint], progress: f64) -> Option<GeoPoint> {
    let last = route.len().checked_sub(1)?;
    let scaled = progress.clamp(0.0, 1.0) * last as f64;

    let idx = (scaled.floor() as usize).min(last);
    let next = (idx + 1).min(last);
    let t = scaled % 1.0;

    Some(route[idx].lerp(&route[next], t))
}

/// One animation tick; wraps back to the start once past the incident
pub fn advance(progress: f64) -> f64 {
    let next = progress + PROGRESS_STEP;
    if next > 1.0 {
        0.0
    } else {
        next
    }
}
