use serde::{Deserialize, Serialize};

/// Geographic coordinate. On the wire both endpoints speak 2-element
/// `[lat, lon]` arrays, so serde goes through a tuple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Component-wise arithmetic mean, not a geodesic midpoint. The
    /// map pans to this point after a route is drawn; the simplification
    /// is part of the endpoint contract and must stay as-is.
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            lat: (self.lat + other.lat) / 2.0,
            lon: (self.lon + other.lon) / 2.0,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lon)
    }
}

pub const NO_ALTERNATIVE: f64 = -1.0;

/// Summary numbers for a route comparison, wire-encoded as
/// `[short_length, short_elevation_gain, alt_length, alt_elevation_gain]`.
/// The alt pair is `-1` when no alternative path was computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64, f64, f64)", into = "(f64, f64, f64, f64)")]
pub struct RouteStats {
    pub short_length: f64,
    pub short_elevation_gain: f64,
    pub alt_length: f64,
    pub alt_elevation_gain: f64,
}

impl RouteStats {
    pub fn has_alternative(&self) -> bool {
        self.alt_length != NO_ALTERNATIVE || self.alt_elevation_gain != NO_ALTERNATIVE
    }
}

impl Default for RouteStats {
    fn default() -> Self {
        Self {
            short_length: 0.0,
            short_elevation_gain: 0.0,
            alt_length: NO_ALTERNATIVE,
            alt_elevation_gain: NO_ALTERNATIVE,
        }
    }
}

impl From<(f64, f64, f64, f64)> for RouteStats {
    fn from(
        (short_length, short_elevation_gain, alt_length, alt_elevation_gain): (f64, f64, f64, f64),
    ) -> Self {
        Self {
            short_length,
            short_elevation_gain,
            alt_length,
            alt_elevation_gain,
        }
    }
}

impl From<RouteStats> for (f64, f64, f64, f64) {
    fn from(stats: RouteStats) -> Self {
        (
            stats.short_length,
            stats.short_elevation_gain,
            stats.alt_length,
            stats.alt_elevation_gain,
        )
    }
}

/// Failure codes the route endpoint can put in its payload. A timeout is
/// signalled by the server, never by client-side expiry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteErrorCode {
    Timeout,
    BadCoords,
}

/// Body of a `POST /api` response. Error payloads carry only `error`,
/// so every other field defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RouteErrorCode>,
    #[serde(default)]
    pub route: Vec<Coordinate>,
    #[serde(default)]
    pub short_route: Vec<Coordinate>,
    #[serde(default)]
    pub stats: RouteStats,
}

/// Body of a `POST /search` response: `[]` when the place was not found,
/// `[lat, lon]` when it was.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub coords: Vec<f64>,
}

impl SearchResponse {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.coords.as_slice() {
            [lat, lon, ..] => Some(Coordinate {
                lat: *lat,
                lon: *lon,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElevationSetting {
    Shortest,
    Minimal,
    Maximal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphSetting {
    Bounded,
    Loading,
}

/// Form fields submitted to the route endpoint. Coordinates travel as the
/// text the user sees in the inputs; the server parses them and answers
/// `badcoords` when they are malformed or missing.
#[derive(Debug, Clone, Serialize)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
    pub distance: String,
    pub elevation: ElevationSetting,
    pub graph: GraphSetting,
}

/// Form fields submitted to the search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    pub place: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_round_trips_as_pair() {
        let json = serde_json::to_string(&Coordinate {
            lat: 42.37,
            lon: -72.51,
        })
        .unwrap();
        assert_eq!(json, "[42.37,-72.51]");
        let back: Coordinate = serde_json::from_str("[42.37,-72.51]").unwrap();
        assert_eq!(
            back,
            Coordinate {
                lat: 42.37,
                lon: -72.51
            }
        );
    }

    #[test]
    fn midpoint_is_component_wise_mean() {
        let a = Coordinate {
            lat: 42.0,
            lon: -72.0,
        };
        let b = Coordinate {
            lat: 42.2,
            lon: -72.4,
        };
        let mid = a.midpoint(b);
        assert!((mid.lat - 42.1).abs() < 1e-9);
        assert!((mid.lon - -72.2).abs() < 1e-9);
    }

    #[test]
    fn error_only_payload_parses() {
        let resp: RouteResponse = serde_json::from_str(r#"{"error":"badcoords"}"#).unwrap();
        assert_eq!(resp.error, Some(RouteErrorCode::BadCoords));
        assert!(resp.route.is_empty());
        assert!(resp.short_route.is_empty());
        assert!(!resp.stats.has_alternative());
    }

    #[test]
    fn full_payload_parses() {
        let resp: RouteResponse = serde_json::from_str(
            r#"{"route":[[42.37,-72.51],[42.38,-72.52]],
                "short_route":[[42.37,-72.51],[42.39,-72.53]],
                "stats":[500,10,480,8]}"#,
        )
        .unwrap();
        assert_eq!(resp.error, None);
        assert_eq!(resp.route.len(), 2);
        assert_eq!(
            resp.route[1],
            Coordinate {
                lat: 42.38,
                lon: -72.52
            }
        );
        assert_eq!(resp.stats.short_length, 500.0);
        assert!(resp.stats.has_alternative());
    }

    #[test]
    fn sentinel_stats_have_no_alternative() {
        let stats: RouteStats = serde_json::from_str("[120.5,3,-1,-1]").unwrap();
        assert!(!stats.has_alternative());
        // one non-sentinel field is enough
        let stats: RouteStats = serde_json::from_str("[120.5,3,90,-1]").unwrap();
        assert!(stats.has_alternative());
    }

    #[test]
    fn search_response_extracts_coordinate() {
        let found: SearchResponse = serde_json::from_str(r#"{"coords":[42.39,-72.52]}"#).unwrap();
        assert_eq!(
            found.coordinate(),
            Some(Coordinate {
                lat: 42.39,
                lon: -72.52
            })
        );
        let missing: SearchResponse = serde_json::from_str(r#"{"coords":[]}"#).unwrap();
        assert_eq!(missing.coordinate(), None);
    }

    #[test]
    fn route_query_encodes_as_form_fields() {
        let query = RouteQuery {
            origin: "42.39000, -72.52000".into(),
            destination: "42.40000, -72.53000".into(),
            distance: "150".into(),
            elevation: ElevationSetting::Maximal,
            graph: GraphSetting::Bounded,
        };
        let body = serde_urlencoded::to_string(&query).unwrap();
        assert!(body.contains("elevation=maximal"));
        assert!(body.contains("graph=bounded"));
        assert!(body.contains("distance=150"));
        assert!(body.starts_with("origin="));
    }
}
