//! Form state behind the route and search controls.

use shared::{Coordinate, ElevationSetting, GraphSetting, RouteQuery, SearchQuery};

#[derive(Clone)]
pub struct RouteForm {
    pub origin: String,
    pub destination: String,
    pub distance: String,
    pub elevation: ElevationSetting,
    pub graph: GraphSetting,
}

impl Default for RouteForm {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            distance: "150".into(),
            elevation: ElevationSetting::Maximal,
            graph: GraphSetting::Bounded,
        }
    }
}

impl RouteForm {
    /// Snapshot of the form as the route endpoint's fields. Coordinates go
    /// out as the raw input text; validation is the server's job.
    pub fn to_query(&self) -> RouteQuery {
        RouteQuery {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            distance: self.distance.clone(),
            elevation: self.elevation,
            graph: self.graph,
        }
    }
}

#[derive(Default, Clone)]
pub struct SearchForm {
    pub place: String,
}

impl SearchForm {
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            place: self.place.clone(),
        }
    }
}

/// Text reflected into the origin/destination inputs when a marker is
/// placed, in the `"lat, lon"` shape the route endpoint parses back.
pub fn format_point(at: Coordinate) -> String {
    format!("{:.5}, {:.5}", at.lat, at.lon)
}

pub fn elevation_from_value(value: &str) -> ElevationSetting {
    match value {
        "minimal" => ElevationSetting::Minimal,
        "maximal" => ElevationSetting::Maximal,
        _ => ElevationSetting::Shortest,
    }
}

pub fn graph_from_value(value: &str) -> GraphSetting {
    match value {
        "loading" => GraphSetting::Loading,
        _ => GraphSetting::Bounded,
    }
}

pub fn elevation_value(setting: ElevationSetting) -> &'static str {
    match setting {
        ElevationSetting::Shortest => "shortest",
        ElevationSetting::Minimal => "minimal",
        ElevationSetting::Maximal => "maximal",
    }
}

pub fn graph_value(setting: GraphSetting) -> &'static str {
    match setting {
        GraphSetting::Bounded => "bounded",
        GraphSetting::Loading => "loading",
    }
}
