//! Interop boundary with the Leaflet map. All layer handles created on the
//! JS side are referenced from Rust by numeric id, so ownership of markers
//! and polylines stays on this side of the boundary.

use serde_wasm_bindgen::to_value;
use shared::Coordinate;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

#[wasm_bindgen(module = "/leaflet_map.js")]
extern "C" {
    #[wasm_bindgen(js_name = initMap)]
    fn init_map_js(lat: f64, lon: f64, zoom: u32);
    #[wasm_bindgen(js_name = panTo)]
    fn pan_to_js(lat: f64, lon: f64);
    #[wasm_bindgen(js_name = addMarker)]
    fn add_marker_js(lat: f64, lon: f64) -> u32;
    #[wasm_bindgen(js_name = addPolyline)]
    fn add_polyline_js(path: JsValue, color: &str) -> u32;
    #[wasm_bindgen(js_name = removeLayer)]
    fn remove_layer_js(id: u32);
}

/// Handle to one layer (marker or polyline) living on the JS map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerId(u32);

/// Everything the client does to the map. The one real implementation is
/// [`LeafletMap`]; tests drive the same calls against a recording fake.
pub trait MapSurface {
    fn pan_to(&self, center: Coordinate);
    fn add_marker(&self, at: Coordinate) -> LayerId;
    fn add_polyline(&self, path: &[Coordinate], color: &str) -> LayerId;
    fn remove_layer(&self, id: LayerId);
}

/// The browser map. Stateless on the Rust side; all calls forward to the
/// JS module.
pub struct LeafletMap;

impl LeafletMap {
    pub fn init(center: Coordinate, zoom: u32) {
        init_map_js(center.lat, center.lon, zoom);
    }
}

impl MapSurface for LeafletMap {
    fn pan_to(&self, center: Coordinate) {
        pan_to_js(center.lat, center.lon);
    }

    fn add_marker(&self, at: Coordinate) -> LayerId {
        LayerId(add_marker_js(at.lat, at.lon))
    }

    fn add_polyline(&self, path: &[Coordinate], color: &str) -> LayerId {
        let coords = to_value(path).unwrap_or(JsValue::NULL);
        LayerId(add_polyline_js(coords, color))
    }

    fn remove_layer(&self, id: LayerId) {
        remove_layer_js(id.0);
    }
}
