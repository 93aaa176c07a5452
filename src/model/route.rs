use serde::{Deserialize, Serialize};

/// Free-text start/end labels for the current tour.
///
/// Lifecycle is independent of the selection: `new-run` keeps the route,
/// only a full `reset` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Route {
    #[serde(default, deserialize_with = "coerce_string")]
    pub start: String,
    #[serde(default, deserialize_with = "coerce_string")]
    pub end: String,
}

impl Route {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Route {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Both fields trimmed of surrounding whitespace, as stored.
    pub fn trimmed(&self) -> Route {
        Route {
            start: self.start.trim().to_string(),
            end: self.end.trim().to_string(),
        }
    }

}

/// Accept any JSON scalar where a string is expected; foreign shapes
/// (objects, arrays) become the empty string rather than a parse error.
fn coerce_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_default_to_empty() {
        let route: Route = serde_json::from_str("{}").unwrap();
        assert_eq!(route, Route::default());
    }

    #[test]
    fn scalar_fields_are_coerced_to_strings() {
        let route: Route = serde_json::from_str(r#"{"start": 42, "end": true}"#).unwrap();
        assert_eq!(route.start, "42");
        assert_eq!(route.end, "true");
    }

    #[test]
    fn non_scalar_fields_become_empty() {
        let route: Route = serde_json::from_str(r#"{"start": {"a": 1}, "end": [1, 2]}"#).unwrap();
        assert_eq!(route, Route::default());
    }

    #[test]
    fn trimmed_strips_surrounding_whitespace() {
        let route = Route::new("  Basel ", "\tChur\n");
        assert_eq!(route.trimmed(), Route::new("Basel", "Chur"));
    }
}
