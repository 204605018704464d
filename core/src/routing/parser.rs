use crate::errors::CoreError;
use crate::routing::types::{ActionSpec, HttpMethod, Route};
use regex::Regex;

/// Compiles a `{param}` route pattern into an anchored regex route.
pub fn parse_route_pattern(
    pattern: &str,
    verb: HttpMethod,
    spec: ActionSpec,
) -> Result<Route, CoreError> {
    let mut regex_pattern = String::from("^");
    let mut param_names = Vec::new();

    for part in pattern.split('/') {
        if part.is_empty() {
            continue;
        }
        regex_pattern.push('/');
        if part.starts_with('{') && part.ends_with('}') {
            param_names.push(part[1..part.len() - 1].to_string());
            regex_pattern.push_str(r"([^/]+)");
        } else {
            regex_pattern.push_str(&regex::escape(part));
        }
    }

    // The root pattern compiles to a bare "/" match
    if regex_pattern == "^" {
        regex_pattern.push('/');
    }
    regex_pattern.push('$');

    let path_regex = Regex::new(&regex_pattern).map_err(|e| CoreError::InvalidRoute {
        message: format!("invalid route pattern '{pattern}': {e}"),
    })?;

    Ok(Route {
        pattern: pattern.to_string(),
        verb,
        spec,
        path_regex,
        param_names,
    })
}
