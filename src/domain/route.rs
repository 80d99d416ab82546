// Dashboard routes and deep links
use serde::Serialize;

/// Query parameter carrying the flight to auto-select on the map.
pub const MAP_FOCUS_PARAM: &str = "flight";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum Route {
    Flights,
    FlightDetail { id: u64 },
    Map { focus: Option<u64> },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Flights => "/".to_string(),
            Route::FlightDetail { id } => format!("/flight/{}", id),
            Route::Map { focus: None } => "/map".to_string(),
            Route::Map { focus: Some(id) } => format!(
                "/map?{}={}",
                MAP_FOCUS_PARAM,
                urlencoding::encode(&id.to_string())
            ),
        }
    }

    /// Parses a path with optional query string. Unknown paths yield `None`.
    pub fn parse(target: &str) -> Option<Self> {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };
        let path = path.trim_end_matches('/');

        if path.is_empty() {
            return Some(Route::Flights);
        }

        if path == "/map" {
            let focus = query.and_then(|q| query_param(q, MAP_FOCUS_PARAM));
            return Some(Route::Map {
                focus: focus.and_then(|v| v.parse().ok()),
            });
        }

        path.strip_prefix("/flight/")
            .and_then(|id| id.parse().ok())
            .map(|id| Route::FlightDetail { id })
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == name {
            urlencoding::decode(value).ok().map(|v| v.into_owned())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Flights.path(), "/");
        assert_eq!(Route::FlightDetail { id: 42 }.path(), "/flight/42");
        assert_eq!(Route::Map { focus: None }.path(), "/map");
        assert_eq!(Route::Map { focus: Some(42) }.path(), "/map?flight=42");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Some(Route::Flights));
        assert_eq!(Route::parse("/flight/7"), Some(Route::FlightDetail { id: 7 }));
        assert_eq!(Route::parse("/map"), Some(Route::Map { focus: None }));
        assert_eq!(
            Route::parse("/map?zoom=4&flight=99"),
            Some(Route::Map { focus: Some(99) })
        );
        assert_eq!(Route::parse("/map?flight=abc"), Some(Route::Map { focus: None }));
        assert_eq!(Route::parse("/flight/abc"), None);
        assert_eq!(Route::parse("/nowhere"), None);
    }
}
