//! View centering. Zoom never changes after mount; panning is the only
//! viewport operation the rest of the client needs.

use shared::Coordinate;

use crate::map::{LeafletMap, MapSurface};

// Amherst
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 42.39,
    lon: -72.52,
};
pub const DEFAULT_ZOOM: u32 = 14;

pub fn mount() {
    LeafletMap::init(DEFAULT_CENTER, DEFAULT_ZOOM);
}

pub fn pan_to(surface: &impl MapSurface, point: Coordinate) {
    surface.pan_to(point);
}

/// Recenter on the component-wise mean of `a` and `b`. Deliberately not a
/// geodesic midpoint; see [`Coordinate::midpoint`].
pub fn pan_to_midpoint(surface: &impl MapSurface, a: Coordinate, b: Coordinate) {
    surface.pan_to(a.midpoint(b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::testing::FakeSurface;

    #[test]
    fn pan_to_midpoint_uses_component_wise_mean() {
        let surface = FakeSurface::default();
        pan_to_midpoint(
            &surface,
            Coordinate {
                lat: 42.0,
                lon: -72.0,
            },
            Coordinate {
                lat: 42.2,
                lon: -72.4,
            },
        );
        let pan = surface.last_pan().expect("no pan recorded");
        assert!((pan.lat - 42.1).abs() < 1e-9);
        assert!((pan.lon - -72.2).abs() < 1e-9);
    }
}
