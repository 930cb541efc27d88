//! Human-readable summary of a route comparison.

use shared::RouteStats;

/// Two lines for the shortest path, two more for the alternative path
/// when its stats were computed. The `-1` sentinel pair is never printed.
pub fn summary_lines(stats: &RouteStats) -> Vec<String> {
    let mut lines = vec![
        format!("Shortest path length: {}m", stats.short_length),
        format!("Shortest path elevation gain: {}m", stats.short_elevation_gain),
    ];
    if stats.has_alternative() {
        lines.push(format!("New path length: {}m", stats.alt_length));
        lines.push(format!(
            "New path elevation gain: {}m",
            stats.alt_elevation_gain
        ));
    }
    lines
}
