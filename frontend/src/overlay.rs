//! Single-occupant layer slots. Each marker and route line category can
//! have at most one layer on the map; installing a replacement removes the
//! previous occupant first, so stale layers never accumulate across
//! repeated interactions.

use shared::Coordinate;

use crate::map::{LayerId, MapSurface};
use crate::viewport;

pub const PRIMARY_COLOR: &str = "red";
pub const ALTERNATIVE_COLOR: &str = "blue";

#[derive(Default)]
pub struct LayerSlot(Option<LayerId>);

impl LayerSlot {
    /// Remove the current occupant from the map, if any.
    pub fn clear(&mut self, surface: &impl MapSurface) {
        if let Some(id) = self.0.take() {
            surface.remove_layer(id);
        }
    }

    /// Install `layer` as the new occupant, releasing the old one first.
    pub fn replace(&mut self, surface: &impl MapSurface, layer: LayerId) {
        self.clear(surface);
        self.0 = Some(layer);
    }

    pub fn is_occupied(&self) -> bool {
        self.0.is_some()
    }
}

/// All map layers owned by the client, one slot per category.
#[derive(Default)]
pub struct Overlays {
    pub origin: LayerSlot,
    pub destination: LayerSlot,
    pub primary: LayerSlot,
    pub alternative: LayerSlot,
}

impl Overlays {
    /// Drop both route lines. Called the instant a new route request
    /// starts, so the map never shows a result the request has already
    /// superseded.
    pub fn clear_routes(&mut self, surface: &impl MapSurface) {
        self.primary.clear(surface);
        self.alternative.clear(surface);
    }
}

pub fn place_origin(overlays: &mut Overlays, surface: &impl MapSurface, at: Coordinate) {
    let marker = surface.add_marker(at);
    overlays.origin.replace(surface, marker);
}

pub fn place_destination(overlays: &mut Overlays, surface: &impl MapSurface, at: Coordinate) {
    let marker = surface.add_marker(at);
    overlays.destination.replace(surface, marker);
}

/// Draw a successful route response: alternative line first so the primary
/// line renders on top, then pan to the midpoint of the primary route's
/// endpoints. `primary` must be non-empty.
pub fn render_route(
    overlays: &mut Overlays,
    surface: &impl MapSurface,
    primary: &[Coordinate],
    alternative: &[Coordinate],
) {
    overlays.clear_routes(surface);
    if !alternative.is_empty() {
        let line = surface.add_polyline(alternative, ALTERNATIVE_COLOR);
        overlays.alternative.replace(surface, line);
    }
    let line = surface.add_polyline(primary, PRIMARY_COLOR);
    overlays.primary.replace(surface, line);

    if let (Some(first), Some(last)) = (primary.first(), primary.last()) {
        viewport::pan_to_midpoint(surface, *first, *last);
    }
}
