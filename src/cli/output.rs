use serde::Serialize;

use crate::model::catalog::{self, Canton};
use crate::model::route::Route;
use crate::ops::session::{Session, Stats};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CantonJson {
    pub code: String,
    pub name: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct ListJson {
    pub cantons: Vec<CantonJson>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub done: usize,
    pub left: usize,
    pub percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

#[derive(Serialize)]
pub struct RouteJson {
    pub start: String,
    pub end: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn canton_to_json(canton: &Canton, done: bool) -> CantonJson {
    CantonJson {
        code: canton.code.to_string(),
        name: canton.name.to_string(),
        done,
    }
}

pub fn stats_to_json(session: &Session) -> StatsJson {
    let Stats {
        done,
        left,
        percent,
    } = session.stats();
    StatsJson {
        done,
        left,
        percent,
        completed_at: session
            .completed_at()
            .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
    }
}

pub fn route_to_json(route: &Route) -> RouteJson {
    RouteJson {
        start: route.start.clone(),
        end: route.end.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single canton as a one-line checklist entry
pub fn format_canton_line(canton: &Canton, done: bool) -> String {
    let mark = if done { 'x' } else { ' ' };
    format!("[{}] {} {}", mark, canton.code, canton.name)
}

/// Format the stats summary shown by `ks stats`
pub fn format_stats(session: &Session) -> Vec<String> {
    let stats = session.stats();
    let mut lines = vec![format!(
        "{}/{} done ({}%), {} left",
        stats.done,
        catalog::TOTAL,
        stats.percent,
        stats.left
    )];
    if let Some(at) = session.completed_at() {
        lines.push(format!(
            "completed: {}",
            at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        ));
    }
    lines
}

/// Format the route for `ks route` without arguments
pub fn format_route(route: &Route) -> Vec<String> {
    vec![
        format!("Start: {}", if route.start.is_empty() { "-" } else { &route.start }),
        format!("Ziel:  {}", if route.end.is_empty() { "-" } else { &route.end }),
    ]
}

/// Parse a `--state` filter value
pub fn parse_state_filter(s: &str) -> Result<bool, String> {
    match s {
        "done" => Ok(true),
        "open" => Ok(false),
        _ => Err(format!("unknown state '{}' (expected: done, open)", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canton_line_shows_checkbox() {
        let canton = catalog::find("AG").unwrap();
        assert_eq!(format_canton_line(canton, false), "[ ] AG Aargau");
        assert_eq!(format_canton_line(canton, true), "[x] AG Aargau");
    }

    #[test]
    fn state_filter_parses() {
        assert_eq!(parse_state_filter("done"), Ok(true));
        assert_eq!(parse_state_filter("open"), Ok(false));
        assert!(parse_state_filter("banana").is_err());
    }
}
