//! Interpretation of collaborator responses. Every request resolves to one
//! value here before anything touches the map, so rendering branches on a
//! plain enum instead of poking at optional payload fields.

use shared::{Coordinate, RouteErrorCode, RouteResponse, RouteStats};
use thiserror::Error;

/// Why a request produced nothing to draw. The display strings are the
/// exact notices shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestFailure {
    #[error("Timed out while looking for path")]
    Timeout,
    #[error("Please select both an origin and a destination")]
    MissingCoordinates,
    #[error("No path found")]
    NoPath,
    #[error("Place not found")]
    PlaceNotFound,
    #[error("Request failed: {0}")]
    Transport(String),
}

/// Outcome of one route request. An empty `route` with no error code is a
/// well-formed answer meaning no path exists, distinct from a failed
/// request.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Found {
        primary: Vec<Coordinate>,
        alternative: Vec<Coordinate>,
        stats: RouteStats,
    },
    Failed(RequestFailure),
}

impl From<RouteResponse> for RouteOutcome {
    fn from(resp: RouteResponse) -> Self {
        match resp.error {
            Some(RouteErrorCode::Timeout) => Self::Failed(RequestFailure::Timeout),
            Some(RouteErrorCode::BadCoords) => Self::Failed(RequestFailure::MissingCoordinates),
            None if resp.route.is_empty() => Self::Failed(RequestFailure::NoPath),
            None => Self::Found {
                primary: resp.route,
                alternative: resp.short_route,
                stats: resp.stats,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_code_wins_over_payload() {
        let resp: RouteResponse = serde_json::from_str(
            r#"{"error":"timeout","route":[[1.0,2.0]],"short_route":[],"stats":[0,0,-1,-1]}"#,
        )
        .unwrap();
        assert_eq!(
            RouteOutcome::from(resp),
            RouteOutcome::Failed(RequestFailure::Timeout)
        );
    }

    #[test]
    fn badcoords_maps_to_missing_coordinates() {
        let resp: RouteResponse = serde_json::from_str(r#"{"error":"badcoords"}"#).unwrap();
        assert_eq!(
            RouteOutcome::from(resp),
            RouteOutcome::Failed(RequestFailure::MissingCoordinates)
        );
    }

    #[test]
    fn empty_route_without_error_is_no_path() {
        let resp: RouteResponse =
            serde_json::from_str(r#"{"route":[],"short_route":[],"stats":[0,0,-1,-1]}"#).unwrap();
        assert_eq!(
            RouteOutcome::from(resp),
            RouteOutcome::Failed(RequestFailure::NoPath)
        );
    }

    #[test]
    fn non_empty_route_is_found() {
        let resp: RouteResponse = serde_json::from_str(
            r#"{"route":[[42.37,-72.51],[42.38,-72.52]],
                "short_route":[[42.37,-72.51],[42.39,-72.53]],
                "stats":[500,10,480,8]}"#,
        )
        .unwrap();
        match RouteOutcome::from(resp) {
            RouteOutcome::Found {
                primary,
                alternative,
                stats,
            } => {
                assert_eq!(primary.len(), 2);
                assert_eq!(alternative.len(), 2);
                assert_eq!(stats.alt_length, 480.0);
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn notices_match_the_user_facing_text() {
        assert_eq!(
            RequestFailure::Timeout.to_string(),
            "Timed out while looking for path"
        );
        assert_eq!(
            RequestFailure::MissingCoordinates.to_string(),
            "Please select both an origin and a destination"
        );
        assert_eq!(RequestFailure::NoPath.to_string(), "No path found");
        assert_eq!(RequestFailure::PlaceNotFound.to_string(), "Place not found");
    }
}
